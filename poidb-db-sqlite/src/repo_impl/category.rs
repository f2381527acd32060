use super::*;

forward_repo!(CategoryRepo for DbReadOnly, DbReadWrite, DbConnection {
    fn get_category(&self, id: &str) -> Result<Category>;
    fn all_categories(&self) -> Result<Vec<Category>>;
});

forward_repo!(CategoryRepoMut for DbReadWrite, DbConnection {
    fn create_category(&self, category: Category) -> Result<Id>;
});

fn create_category(conn: &mut SqliteConnection, category: Category) -> Result<Id> {
    let id = if category.id.is_valid() {
        category.id
    } else {
        Id::new()
    };
    diesel::insert_into(schema::category::table)
        .values(&models::NewCategory {
            id: id.as_str(),
            name: &category.name,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(id)
}

fn get_category(conn: &mut SqliteConnection, id: &str) -> Result<Category> {
    use schema::category::dsl;
    let models::Category { rowid: _, id, name } = dsl::category
        .filter(dsl::id.eq(id))
        .first::<models::Category>(conn)
        .map_err(from_diesel_err)?;
    Ok(Category {
        id: id.into(),
        name,
    })
}

fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::category::dsl;
    Ok(dsl::category
        .order_by(dsl::name)
        .load::<models::Category>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|models::Category { rowid: _, id, name }| Category {
            id: id.into(),
            name,
        })
        .collect())
}

use super::*;

forward_repo!(ImageRepo for DbReadOnly, DbReadWrite, DbConnection {
    fn get_image(&self, id: &str) -> Result<Image>;
    fn images_of_interest_point(&self, interest_point_id: &str) -> Result<Vec<Image>>;
});

forward_repo!(ImageRepoMut for DbReadWrite, DbConnection {
    fn add_image(&self, interest_point_id: &str, image: Image) -> Result<Id>;
    fn release_images(&self, ids: &[&str]) -> Result<usize>;
});

fn add_image(conn: &mut SqliteConnection, interest_point_id: &str, image: Image) -> Result<Id> {
    let parent_rowid = resolve_interest_point_rowid(conn, interest_point_id)?;
    let id = Id::new();
    let new_image = models::NewImage {
        id: id.as_str(),
        parent_rowid: Some(parent_rowid),
        file_url: &image.file_url,
        contributor_id: image.contributor.into(),
        approver_id: image.approver.map(Into::into),
    };
    diesel::insert_into(schema::image::table)
        .values(&new_image)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(id)
}

fn get_image(conn: &mut SqliteConnection, id: &str) -> Result<Image> {
    use schema::image::dsl;
    let model = dsl::image
        .filter(dsl::id.eq(id))
        .first::<models::Image>(conn)
        .map_err(from_diesel_err)?;
    let interest_point = model
        .parent_rowid
        .map(|parent_rowid| {
            use schema::interest_point::dsl;
            dsl::interest_point
                .select(dsl::id)
                .filter(dsl::rowid.eq(parent_rowid))
                .first::<String>(conn)
                .map_err(from_diesel_err)
        })
        .transpose()?
        .map(Id::from);
    Ok(load_image(model, interest_point))
}

fn images_of_interest_point(
    conn: &mut SqliteConnection,
    interest_point_id: &str,
) -> Result<Vec<Image>> {
    let parent_rowid = resolve_interest_point_rowid(conn, interest_point_id)?;
    use schema::image::dsl;
    Ok(dsl::image
        .filter(dsl::parent_rowid.eq(parent_rowid))
        .order_by(dsl::rowid)
        .load::<models::Image>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|model| load_image(model, Some(interest_point_id.into())))
        .collect())
}

fn release_images(conn: &mut SqliteConnection, ids: &[&str]) -> Result<usize> {
    use schema::image::dsl;
    diesel::update(dsl::image.filter(dsl::id.eq_any(ids)))
        .set(dsl::parent_rowid.eq(None::<i64>))
        .execute(conn)
        .map_err(from_diesel_err)
}

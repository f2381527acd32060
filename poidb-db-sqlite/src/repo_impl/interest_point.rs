use super::*;

forward_repo!(InterestPointRepo for DbReadOnly, DbReadWrite, DbConnection {
    fn get_interest_point(&self, id: &str) -> Result<InterestPoint>;
    fn all_interest_points(&self) -> Result<Vec<InterestPoint>>;
    fn active_interest_points(&self) -> Result<Vec<InterestPoint>>;
    fn count_interest_points(&self) -> Result<usize>;
});

forward_repo!(InterestPointRepoMut for DbReadWrite, DbConnection {
    fn create_interest_point(&self, interest_point: InterestPoint) -> Result<Id>;
    fn update_interest_point(&self, interest_point: &InterestPoint, expected: Revision) -> Result<()>;
    fn delete_interest_point(&self, id: &str) -> Result<()>;
});

fn create_interest_point(conn: &mut SqliteConnection, interest_point: InterestPoint) -> Result<Id> {
    let id = if interest_point.id.is_valid() {
        interest_point.id.clone()
    } else {
        Id::new()
    };
    let interest_point = InterestPoint {
        id: id.clone(),
        ..interest_point
    };
    diesel::insert_into(schema::interest_point::table)
        .values(&into_interest_point_record(&interest_point))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(id)
}

fn update_interest_point(
    conn: &mut SqliteConnection,
    interest_point: &InterestPoint,
    expected: Revision,
) -> Result<()> {
    use schema::interest_point::dsl;
    let count = diesel::update(
        dsl::interest_point
            .filter(dsl::id.eq(interest_point.id.as_str()))
            .filter(dsl::rev.eq(u64::from(expected) as i64)),
    )
    .set(&into_interest_point_record(interest_point))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count > 0 {
        debug_assert_eq!(1, count);
        return Ok(());
    }
    // Either missing or modified concurrently
    resolve_interest_point_rowid(conn, interest_point.id.as_str())?;
    log::info!(
        "Stored revision of interest point {} doesn't match the expected revision {expected}",
        interest_point.id
    );
    Err(repo::Error::InvalidVersion)
}

fn delete_interest_point(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::interest_point::dsl;
    let count = diesel::delete(dsl::interest_point.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn get_interest_point(conn: &mut SqliteConnection, id: &str) -> Result<InterestPoint> {
    use schema::interest_point::dsl;
    let model = dsl::interest_point
        .filter(dsl::id.eq(id))
        .first::<models::InterestPoint>(conn)
        .map_err(from_diesel_err)?;
    load_interest_point(model)
}

fn all_interest_points(conn: &mut SqliteConnection) -> Result<Vec<InterestPoint>> {
    use schema::interest_point::dsl;
    dsl::interest_point
        .order_by(dsl::rowid)
        .load::<models::InterestPoint>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_interest_point)
        .collect()
}

fn active_interest_points(conn: &mut SqliteConnection) -> Result<Vec<InterestPoint>> {
    use schema::interest_point::dsl;
    dsl::interest_point
        .filter(dsl::approved_at.is_not_null())
        .order_by(dsl::rowid)
        .load::<models::InterestPoint>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_interest_point)
        .collect()
}

fn count_interest_points(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::interest_point::dsl;
    Ok(dsl::interest_point
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = interest_point, treat_none_as_null = true)]
pub struct InterestPointRecord<'a> {
    pub id: &'a str,
    pub rev: i64,
    pub created_at: i64,
    pub name: &'a str,
    pub summary: &'a str,
    pub address_line_1: Option<&'a str>,
    pub address_line_2: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub zip: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub category_id: Option<&'a str>,
    pub contributor_id: i64,
    pub approver_id: Option<i64>,
    pub approved_at: Option<i64>,
    pub default_image_id: Option<&'a str>,
}

#[derive(Queryable)]
pub struct InterestPoint {
    pub rowid: i64,
    pub id: String,
    pub rev: i64,
    pub created_at: i64,
    pub name: String,
    pub summary: String,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub category_id: Option<String>,
    pub contributor_id: i64,
    pub approver_id: Option<i64>,
    pub approved_at: Option<i64>,
    pub default_image_id: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = image)]
pub struct NewImage<'a> {
    pub id: &'a str,
    pub parent_rowid: Option<i64>,
    pub file_url: &'a str,
    pub contributor_id: i64,
    pub approver_id: Option<i64>,
}

#[derive(Queryable)]
pub struct Image {
    pub rowid: i64,
    pub id: String,
    pub parent_rowid: Option<i64>,
    pub file_url: String,
    pub contributor_id: i64,
    pub approver_id: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = category)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct Category {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

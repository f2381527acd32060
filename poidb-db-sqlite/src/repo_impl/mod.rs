// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use poidb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

// Each connection type forwards a repository trait to the functions
// of the same name that operate on a plain `SqliteConnection`.
macro_rules! forward_repo {
    (@impl $repo:ident, $db:ident, {
        $(fn $method:ident(&self $(, $arg:ident: $arg_ty:ty)*) -> $ret:ty;)+
    }) => {
        impl $repo for $db<'_> {
            $(
                fn $method(&self $(, $arg: $arg_ty)*) -> $ret {
                    $method(&mut self.conn.borrow_mut() $(, $arg)*)
                }
            )+
        }
    };
    (@split $repo:ident [$($dbs:ident)*] $db:ident, $($rest:tt)+) => {
        forward_repo!(@split $repo [$($dbs)* $db] $($rest)+);
    };
    (@split $repo:ident [$($dbs:ident)*] $db:ident $methods:tt) => {
        $(forward_repo!(@impl $repo, $dbs, $methods);)*
        forward_repo!(@impl $repo, $db, $methods);
    };
    ($repo:ident for $($rest:tt)+) => {
        forward_repo!(@split $repo [] $($rest)+);
    };
}

mod category;
mod image;
mod interest_point;


type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_timestamp(millis: i64) -> Result<Timestamp> {
    Timestamp::try_from_millis(millis).map_err(|err| anyhow!(err).into())
}

fn resolve_interest_point_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::interest_point::dsl;
    dsl::interest_point
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_interest_point(model: models::InterestPoint) -> Result<InterestPoint> {
    let models::InterestPoint {
        rowid: _,
        id,
        rev,
        created_at,
        name,
        summary,
        address_line_1,
        address_line_2,
        city,
        state,
        zip,
        lat,
        lng,
        category_id,
        contributor_id,
        approver_id,
        approved_at,
        default_image_id,
    } = model;

    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(
            MapPoint::try_from_lat_lng_deg(lat, lng)
                .map_err(|err| anyhow!("Invalid position of interest point {id}: {err}"))?,
        ),
        _ => None,
    };
    let address = Address {
        line_1: address_line_1,
        line_2: address_line_2,
        city,
        state,
        zip,
    };
    let address = (!address.is_empty()).then_some(address);

    let approval = match (approver_id, approved_at) {
        (Some(approver), Some(approved_at)) => Some(Approval {
            approver: approver.into(),
            approved_at: load_timestamp(approved_at)?,
        }),
        (None, None) => None,
        _ => {
            // Prevented by a table constraint
            log::warn!("Incomplete approval of interest point {id}");
            None
        }
    };

    Ok(InterestPoint {
        id: id.into(),
        revision: Revision::from(rev as u64),
        created_at: load_timestamp(created_at)?,
        name,
        summary,
        location: Location { pos, address },
        category: category_id.map(Into::into),
        contributor: contributor_id.into(),
        approval,
        default_image: default_image_id.map(Into::into),
    })
}

fn into_interest_point_record(interest_point: &InterestPoint) -> models::InterestPointRecord<'_> {
    let InterestPoint {
        id,
        revision,
        created_at,
        name,
        summary,
        location: Location { pos, address },
        category,
        contributor,
        approval,
        default_image,
    } = interest_point;
    let address = address.as_ref();
    models::InterestPointRecord {
        id: id.as_str(),
        rev: u64::from(*revision) as i64,
        created_at: created_at.as_millis(),
        name,
        summary,
        address_line_1: address.and_then(|a| a.line_1.as_deref()),
        address_line_2: address.and_then(|a| a.line_2.as_deref()),
        city: address.and_then(|a| a.city.as_deref()),
        state: address.and_then(|a| a.state.as_deref()),
        zip: address.and_then(|a| a.zip.as_deref()),
        lat: pos.map(|pos| pos.lat()),
        lng: pos.map(|pos| pos.lng()),
        category_id: category.as_ref().map(Id::as_str),
        contributor_id: (*contributor).into(),
        approver_id: approval.as_ref().map(|a| a.approver.into()),
        approved_at: approval.as_ref().map(|a| a.approved_at.as_millis()),
        default_image_id: default_image.as_ref().map(Id::as_str),
    }
}

fn load_image(model: models::Image, interest_point: Option<Id>) -> Image {
    let models::Image {
        rowid: _,
        id,
        parent_rowid: _,
        file_url,
        contributor_id,
        approver_id,
    } = model;
    Image {
        id: id.into(),
        file_url,
        interest_point,
        contributor: contributor_id.into(),
        approver: approver_id.map(Into::into),
    }
}

use poidb_entities::{address::*, email::*, image::*, interest_point::*};
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

const DATE_TIME_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

fn subject_interest_point_added(name: &str) -> String {
    format!("POIDB - new interest point awaiting approval: {name}")
}

fn address_line(address: Option<&Address>) -> String {
    let Some(address) = address else {
        return String::new();
    };
    let Address {
        line_1,
        line_2,
        city,
        state,
        zip,
    } = address;
    let locality = [zip.as_deref(), city.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    [
        line_1.as_deref().unwrap_or_default(),
        line_2.as_deref().unwrap_or_default(),
        &locality,
        state.as_deref().unwrap_or_default(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

pub fn interest_point_added_email(interest_point: &InterestPoint, images: &[Image]) -> EmailContent {
    let subject = subject_interest_point_added(&interest_point.name);
    let created_at = OffsetDateTime::from(interest_point.created_at)
        .format(DATE_TIME_FORMAT)
        .unwrap_or_else(|_| interest_point.created_at.to_string());
    let position = interest_point
        .location
        .pos
        .map(|pos| pos.to_string())
        .unwrap_or_default();
    let default_image = interest_point
        .default_image
        .as_ref()
        .and_then(|id| images.iter().find(|img| &img.id == id))
        .map(|img| img.file_url.as_str())
        .unwrap_or_default();

    let body = format!(
        "Hello,\n\n\
         a new interest point has been contributed and awaits approval.\n\n\
         Name:          {name}\n\
         Summary:       {summary}\n\
         Address:       {address}\n\
         Position:      {position}\n\
         Contributor:   {contributor}\n\
         Created at:    {created_at}\n\
         Images:        {image_count}\n\
         Default image: {default_image}\n\n\
         Id: {id}\n",
        name = interest_point.name,
        summary = interest_point.summary,
        address = address_line(interest_point.location.address.as_ref()),
        contributor = interest_point.contributor,
        image_count = images.len(),
        id = interest_point.id,
    );
    EmailContent { subject, body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poidb_entities::builders::*;

    #[test]
    fn address_line_skips_missing_parts() {
        let address = Address::build()
            .line_1("Harbour 1")
            .zip("24103")
            .city("Kiel")
            .finish();
        assert_eq!("Harbour 1, 24103 Kiel", address_line(Some(&address)));
        let address = Address::build().city("Kiel").finish();
        assert_eq!("Kiel", address_line(Some(&address)));
        assert_eq!("", address_line(None));
    }

    #[test]
    fn email_mentions_the_default_image() {
        let image = Image::build()
            .id("img-1")
            .file_url("image/img-1/tower.jpg")
            .finish();
        let interest_point = InterestPoint::build()
            .id("poi-1")
            .name("Tower")
            .default_image(Some("img-1"))
            .finish();
        let EmailContent { subject, body } = interest_point_added_email(&interest_point, &[image]);
        assert!(subject.ends_with(": Tower"));
        assert!(body.contains("Default image: image/img-1/tower.jpg"));
        assert!(body.contains("Images:        1"));
        assert!(body.contains("Id: poi-1"));
    }
}

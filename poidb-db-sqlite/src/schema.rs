///////////////////////////////////////////////////////////////////////
// Categories
///////////////////////////////////////////////////////////////////////

table! {
    category (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Interest points
///////////////////////////////////////////////////////////////////////

table! {
    interest_point (rowid) {
        rowid -> BigInt,
        id -> Text,
        rev -> BigInt,
        created_at -> BigInt,
        name -> Text,
        summary -> Text,
        address_line_1 -> Nullable<Text>,
        address_line_2 -> Nullable<Text>,
        city -> Nullable<Text>,
        state -> Nullable<Text>,
        zip -> Nullable<Text>,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
        category_id -> Nullable<Text>,
        contributor_id -> BigInt,
        approver_id -> Nullable<BigInt>,
        approved_at -> Nullable<BigInt>,
        default_image_id -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Images
///////////////////////////////////////////////////////////////////////

table! {
    image (rowid) {
        rowid -> BigInt,
        id -> Text,
        parent_rowid -> Nullable<BigInt>,
        file_url -> Text,
        contributor_id -> BigInt,
        approver_id -> Nullable<BigInt>,
    }
}

allow_tables_to_appear_in_same_query!(category, interest_point, image);

use tantivy::schema::{self, FAST, STORED, STRING, Schema, TEXT};

/// Field names used in the provider-directory Tantivy index.
pub mod field {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const BIO: &str = "bio";
    pub const SPECIALTY: &str = "specialty";
    pub const DENOMINATION: &str = "denomination";
    pub const INSURANCE: &str = "insurance";
    pub const LOCATION_TYPE: &str = "location_type";
    pub const ACCEPTING: &str = "accepting";
    pub const FAITH_BASED: &str = "faith_based";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const RATING: &str = "rating";
    pub const REVIEW_COUNT: &str = "review_count";
    pub const S3_KEY: &str = "s3_key";
}

/// Build the Tantivy schema for the provider directory.
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();

    // Identifier — stored and indexed as an exact string
    builder.add_text_field(field::ID, STRING | STORED);

    // Full-text searchable fields
    builder.add_text_field(field::NAME, TEXT | STORED);
    builder.add_text_field(field::BIO, TEXT);

    // Tag fields — one value added per tag, matched exactly
    builder.add_text_field(field::SPECIALTY, STRING | STORED);
    builder.add_text_field(field::DENOMINATION, STRING | STORED);
    builder.add_text_field(field::INSURANCE, STRING | STORED);

    // Filterable enum/flag fields; booleans stored as "true"/"false" text
    builder.add_text_field(field::LOCATION_TYPE, STRING | STORED);
    builder.add_text_field(field::ACCEPTING, STRING | STORED);
    builder.add_text_field(field::FAITH_BASED, STRING | STORED);

    builder.add_text_field(field::CITY, STRING | STORED);
    builder.add_text_field(field::STATE, STRING | STORED);

    // Rating — fast for sorting result pages by rating
    builder.add_f64_field(field::RATING, STORED | FAST);
    builder.add_u64_field(field::REVIEW_COUNT, STORED);

    // Stored-only metadata
    builder.add_text_field(field::S3_KEY, STORED);

    builder.build()
}

/// Resolve a field by name from the schema, returning the Tantivy `Field` handle.
///
/// # Panics
///
/// Panics if the field name does not exist in the schema. This is only called
/// with compile-time field name constants, so a panic indicates a schema
/// definition bug.
pub fn get_field(schema: &Schema, name: &str) -> schema::Field {
    schema
        .get_field(name)
        .unwrap_or_else(|_| panic!("field '{name}' not found in schema"))
}

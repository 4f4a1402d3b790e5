use tantivy::schema::Schema;
use tantivy::{Index, IndexWriter, TantivyDocument, Term};

use shepherd_core::models::provider::Provider;
use shepherd_core::s3_keys;
use shepherd_core::schema::{field, get_field};

use crate::error::SearchError;

fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Project a provider record into its index document.
///
/// Tag fields (specialty, denomination, insurance) are multi-valued: one
/// term per tag, matched exactly by the directory filters.
pub fn provider_document(schema: &Schema, provider: &Provider) -> TantivyDocument {
    let mut doc = TantivyDocument::new();

    doc.add_text(get_field(schema, field::ID), provider.id.to_string());
    doc.add_text(get_field(schema, field::NAME), &provider.name);
    if let Some(bio) = &provider.bio {
        doc.add_text(get_field(schema, field::BIO), bio);
    }

    for specialty in &provider.specialties {
        doc.add_text(get_field(schema, field::SPECIALTY), specialty);
    }
    for denomination in &provider.denominations {
        doc.add_text(get_field(schema, field::DENOMINATION), denomination);
    }
    for insurance in &provider.insurance_accepted {
        doc.add_text(get_field(schema, field::INSURANCE), insurance);
    }

    doc.add_text(
        get_field(schema, field::LOCATION_TYPE),
        provider.location_type.as_str(),
    );
    doc.add_text(
        get_field(schema, field::ACCEPTING),
        bool_text(provider.accepting_new_clients),
    );
    doc.add_text(
        get_field(schema, field::FAITH_BASED),
        bool_text(provider.faith_based()),
    );

    if let Some(city) = &provider.city {
        doc.add_text(get_field(schema, field::CITY), city);
    }
    if let Some(state) = &provider.state {
        doc.add_text(get_field(schema, field::STATE), state);
    }

    doc.add_f64(get_field(schema, field::RATING), provider.rating);
    doc.add_u64(
        get_field(schema, field::REVIEW_COUNT),
        u64::from(provider.review_count),
    );
    doc.add_text(get_field(schema, field::S3_KEY), s3_keys::provider(provider.id));

    doc
}

/// Insert or replace a provider in the index. Delete-by-id then add is
/// the standard Tantivy update pattern.
pub fn index_provider(
    index: &Index,
    writer: &IndexWriter,
    provider: &Provider,
) -> Result<(), SearchError> {
    let schema = index.schema();
    let id_field = get_field(&schema, field::ID);
    let term = Term::from_field_text(id_field, &provider.id.to_string());

    writer.delete_term(term);
    writer.add_document(provider_document(&schema, provider))?;
    Ok(())
}

/// Remove a provider from the index by id.
pub fn remove_provider(index: &Index, writer: &IndexWriter, id: &str) -> Result<(), SearchError> {
    let schema = index.schema();
    let id_field = get_field(&schema, field::ID);
    let term = Term::from_field_text(id_field, id);

    writer.delete_term(term);
    Ok(())
}

/// Commit all pending changes to the index.
pub fn commit(writer: &mut IndexWriter) -> Result<(), SearchError> {
    writer.commit()?;
    Ok(())
}

use serde::Serialize;
use tantivy::collector::TopDocs;
use tantivy::query::{AllQuery, BooleanQuery, Occur, Query, QueryParser, TermQuery};
use tantivy::schema::{IndexRecordOption, Schema, Value};
use tantivy::{Index, Order, TantivyDocument, Term};

use shepherd_core::models::provider::LocationType;
use shepherd_core::schema::{field, get_field};

use crate::error::SearchError;

/// A provider surfaced by the directory. The full record lives in S3 at
/// `s3_key`; the hit carries just enough to render a result row.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryHit {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub rating: f64,
    pub s3_key: String,
}

/// Structured directory filters, mirroring the browse sidebar.
/// All present filters must hold.
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    pub specialty: Option<String>,
    pub denomination: Option<String>,
    pub insurance: Option<String>,
    pub location: Option<LocationType>,
    /// Virtual or hybrid providers only.
    pub telehealth_only: bool,
    /// Providers with at least one denomination listed.
    pub faith_based_only: bool,
    pub accepting_only: bool,
}

/// Full-text search over provider names, bios, and specialties,
/// ranked by relevance.
pub fn search(
    index: &Index,
    query_text: &str,
    limit: usize,
) -> Result<Vec<DirectoryHit>, SearchError> {
    let reader = index.reader()?;
    let searcher = reader.searcher();
    let schema = index.schema();

    let name_field = get_field(&schema, field::NAME);
    let bio_field = get_field(&schema, field::BIO);
    let specialty_field = get_field(&schema, field::SPECIALTY);

    let query_parser = QueryParser::for_index(index, vec![name_field, bio_field, specialty_field]);
    let query = query_parser
        .parse_query(query_text)
        .map_err(|e| SearchError::QueryParse(e.to_string()))?;

    let top_docs = searcher.search(&query, &TopDocs::with_limit(limit))?;

    let mut hits = Vec::new();
    for (_score, doc_address) in top_docs {
        let doc = searcher.doc::<TantivyDocument>(doc_address)?;
        hits.push(hit_from_doc(&schema, &doc));
    }
    Ok(hits)
}

/// Apply structured directory filters, returning hits ordered by rating
/// (highest first).
pub fn filter_directory(
    index: &Index,
    filter: &DirectoryFilter,
    limit: usize,
) -> Result<Vec<DirectoryHit>, SearchError> {
    let reader = index.reader()?;
    let searcher = reader.searcher();
    let schema = index.schema();

    let query = build_filter_query(&schema, filter);
    let collector = TopDocs::with_limit(limit).order_by_fast_field::<f64>(field::RATING, Order::Desc);
    let top_docs = searcher.search(&query, &collector)?;

    let mut hits = Vec::new();
    for (_rating, doc_address) in top_docs {
        let doc = searcher.doc::<TantivyDocument>(doc_address)?;
        hits.push(hit_from_doc(&schema, &doc));
    }
    Ok(hits)
}

fn build_filter_query(schema: &Schema, filter: &DirectoryFilter) -> Box<dyn Query> {
    let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();

    let mut must_term = |field_name: &str, value: &str| {
        let term = Term::from_field_text(get_field(schema, field_name), value);
        clauses.push((
            Occur::Must,
            Box::new(TermQuery::new(term, IndexRecordOption::Basic)) as Box<dyn Query>,
        ));
    };

    if let Some(specialty) = &filter.specialty {
        must_term(field::SPECIALTY, specialty);
    }
    if let Some(denomination) = &filter.denomination {
        must_term(field::DENOMINATION, denomination);
    }
    if let Some(insurance) = &filter.insurance {
        must_term(field::INSURANCE, insurance);
    }
    if let Some(location) = filter.location {
        must_term(field::LOCATION_TYPE, location.as_str());
    }
    if filter.faith_based_only {
        must_term(field::FAITH_BASED, "true");
    }
    if filter.accepting_only {
        must_term(field::ACCEPTING, "true");
    }

    if filter.telehealth_only {
        // Telehealth means virtual or hybrid.
        let location_field = get_field(schema, field::LOCATION_TYPE);
        let either: Vec<(Occur, Box<dyn Query>)> = [LocationType::Virtual, LocationType::Both]
            .into_iter()
            .map(|lt| {
                let term = Term::from_field_text(location_field, lt.as_str());
                (
                    Occur::Should,
                    Box::new(TermQuery::new(term, IndexRecordOption::Basic)) as Box<dyn Query>,
                )
            })
            .collect();
        clauses.push((Occur::Must, Box::new(BooleanQuery::new(either))));
    }

    if clauses.is_empty() {
        Box::new(AllQuery)
    } else {
        Box::new(BooleanQuery::new(clauses))
    }
}

fn hit_from_doc(schema: &Schema, doc: &TantivyDocument) -> DirectoryHit {
    let text = |name: &str| {
        doc.get_first(get_field(schema, name))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    };

    DirectoryHit {
        id: text(field::ID).unwrap_or_default(),
        name: text(field::NAME).unwrap_or_default(),
        city: text(field::CITY),
        state: text(field::STATE),
        rating: doc
            .get_first(get_field(schema, field::RATING))
            .and_then(|v| v.as_f64())
            .unwrap_or_default(),
        s3_key: text(field::S3_KEY).unwrap_or_default(),
    }
}

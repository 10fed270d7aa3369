//! Validation and resolution of the positional arguments of `top` and
//! `search`.
//!
//! Both commands take exactly four arguments (the verb itself excluded).
//! `_` is a wildcard selecting the default of its position.

use crate::{
    Error, Res,
    types::{SearchOperator, SearchType, TimeRange, TopKind},
};

pub const WILDCARD: &str = "_";

pub const DEFAULT_TOP_LIMIT: u8 = 50;
pub const DEFAULT_TOP_OFFSET: u8 = 0;
pub const MAX_TOP_LIMIT: u8 = 50;
// TODO: the help text advertises offsets 0...50; decide whether to raise
// this bound to 50 or fix the help text.
pub const MAX_TOP_OFFSET: u8 = 49;

const TOP_TYPES: [&str; 3] = [WILDCARD, "tracks", "artists"];
const TOP_TERMS: [&str; 4] = [WILDCARD, "short", "medium", "long"];
const SEARCH_OPERATORS: [&str; 3] = [WILDCARD, "or", "not"];
const SEARCH_TYPES: [&str; 4] = [WILDCARD, "track", "artist", "album"];

/// A resolved `top` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopRequest {
    pub kind: TopKind,
    pub time_range: TimeRange,
    pub limit: u8,
    pub offset: u8,
}

impl Default for TopRequest {
    fn default() -> Self {
        Self {
            kind: TopKind::Tracks,
            time_range: TimeRange::Medium,
            limit: DEFAULT_TOP_LIMIT,
            offset: DEFAULT_TOP_OFFSET,
        }
    }
}

impl TopRequest {
    /// Validates `[type, term, limit, offset]` and resolves wildcards.
    pub fn from_tokens(tokens: &[String]) -> Res<Self> {
        validate_top_request(tokens)?;

        let mut request = TopRequest::default();
        if tokens[0] != WILDCARD {
            request.kind = tokens[0].parse()?;
        }
        if tokens[1] != WILDCARD {
            request.time_range = tokens[1].parse()?;
        }
        if let Some(limit) = parse_bounded(&tokens[2], 1, MAX_TOP_LIMIT) {
            request.limit = limit;
        }
        if let Some(offset) = parse_bounded(&tokens[3], 0, MAX_TOP_OFFSET) {
            request.offset = offset;
        }
        Ok(request)
    }
}

/// Checks the shape of a `top` argument list without resolving it.
pub fn validate_top_request(tokens: &[String]) -> Res<()> {
    if tokens.len() != 4 {
        return Err(Error::validation("invalid number of tokens"));
    }

    if !TOP_TYPES.contains(&tokens[0].as_str()) {
        return Err(Error::validation(
            "type must either be a wildcard, tracks or artists",
        ));
    }

    if !TOP_TERMS.contains(&tokens[1].as_str()) {
        return Err(Error::validation(
            "term must either be wildcard, short, medium or long",
        ));
    }

    let limit = &tokens[2];
    if limit != WILDCARD {
        if !is_numeric(limit) {
            return Err(Error::validation("invalid limit specifier"));
        }
        if parse_bounded(limit, 1, MAX_TOP_LIMIT).is_none() {
            return Err(Error::validation("limit must be between 1 and 50"));
        }
    }

    let offset = &tokens[3];
    if offset != WILDCARD {
        if !is_numeric(offset) {
            return Err(Error::validation("invalid offset specifier"));
        }
        if parse_bounded(offset, 0, MAX_TOP_OFFSET).is_none() {
            return Err(Error::validation("offset must be between 0 and 49"));
        }
    }

    Ok(())
}

/// A resolved `search` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub operator: Option<SearchOperator>,
    pub operator_query: Option<String>,
    pub kind: SearchType,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, kind: SearchType) -> Self {
        Self {
            query: query.into(),
            operator: None,
            operator_query: None,
            kind,
        }
    }

    /// Validates `[query, operator, operator_query, type]` and resolves
    /// wildcards. A wildcard operator or operator query means "none".
    pub fn from_tokens(tokens: &[String]) -> Res<Self> {
        validate_search_request(tokens)?;

        let operator = SearchOperator::parse(&tokens[1]);
        let operator_query = Some(tokens[2].clone()).filter(|q| q != WILDCARD);
        let kind = SearchType::parse_lenient(&tokens[3]).unwrap_or_default();

        Ok(Self {
            query: tokens[0].clone(),
            operator,
            operator_query,
            kind,
        })
    }

    /// The `q` parameter sent to the search endpoint.
    ///
    /// The boolean clause is only appended when both the operator and its
    /// query are present.
    pub fn query_string(&self) -> String {
        match (&self.operator, &self.operator_query) {
            (Some(op), Some(op_query)) => format!("{} {} {}", self.query, op, op_query),
            _ => self.query.clone(),
        }
    }
}

/// Checks the shape of a `search` argument list without resolving it.
pub fn validate_search_request(tokens: &[String]) -> Res<()> {
    if tokens.len() != 4 {
        return Err(Error::validation("invalid number of tokens"));
    }

    if tokens[0].trim().is_empty() {
        return Err(Error::validation("A query is required"));
    }

    if !SEARCH_OPERATORS.contains(&tokens[1].to_lowercase().as_str()) {
        return Err(Error::validation("invalid operator"));
    }

    if !SEARCH_TYPES.contains(&tokens[3].as_str()) {
        return Err(Error::validation("invalid type"));
    }

    Ok(())
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn parse_bounded(value: &str, min: u8, max: u8) -> Option<u8> {
    if !is_numeric(value) {
        return None;
    }
    value
        .parse::<u64>()
        .ok()
        .filter(|v| (min as u64..=max as u64).contains(v))
        .map(|v| v as u8)
}

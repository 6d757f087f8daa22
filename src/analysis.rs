//! Text analysis module for Lectern.
//!
//! This module turns raw text into position-tagged terms. Tokenizer names and
//! behaviour follow Elasticsearch: a [`tokenizer::Tokenizer`] splits the text,
//! optional [`token_filter::Filter`]s post-process the tokens, and an
//! [`analyzer::PipelineAnalyzer`] chains the two for the indexer.

pub mod analyzer;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub mod lyrics;
pub mod search_results;

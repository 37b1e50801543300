use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// Score of a single company.
///
/// Percentages are [`None`] when the corresponding bound is zero.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompanyScore {
    pub company: String,
    pub score: f64,
    pub percent_away_from_best: Option<f64>,
    pub percent_away_from_worst: Option<f64>,
}

/// Companies from the best score to the worst.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, derive_more::Deref, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct RankingTable(Vec<CompanyScore>);

/// Order the companies by score, lower is better.
///
/// Companies with equal scores keep their input order.
pub fn rank(scores: impl IntoIterator<Item = CompanyScore>) -> RankingTable {
    RankingTable(scores.into_iter().sorted_by_key(|score| OrderedFloat(score.score)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company_score(company: &str, score: f64) -> CompanyScore {
        CompanyScore {
            company: company.to_owned(),
            score,
            percent_away_from_best: None,
            percent_away_from_worst: None,
        }
    }

    fn names(table: &RankingTable) -> Vec<&str> {
        table.iter().map(|score| score.company.as_str()).collect()
    }

    #[test]
    fn test_rank_ascending() {
        let table = rank([company_score("a", 0.6), company_score("b", 0.1), company_score("c", 0.9)]);
        assert_eq!(names(&table), ["b", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = rank([
            company_score("first", 0.5),
            company_score("best", 0.0),
            company_score("second", 0.5),
            company_score("third", 0.5),
        ]);
        assert_eq!(names(&table), ["best", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}

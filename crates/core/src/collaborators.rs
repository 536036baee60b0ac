//! Collaborator aggregation across a user's repositories.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Contributor;

/// A collaborator with contributions summed across sampled repos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    pub login: String,
    pub contributions: u64,
}

/// Merge per-repository contributor lists into a ranked collaborator
/// list. The repo owner is excluded, contributions are summed per login,
/// and the result is sorted by contributions descending (login ascending
/// on ties), capped at 30 entries.
pub fn merge_collaborators(owner: &str, per_repo: &[Vec<Contributor>]) -> Vec<Collaborator> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for contributors in per_repo {
        for contributor in contributors {
            let Some(login) = contributor.login.as_deref() else {
                continue;
            };
            if login == owner {
                continue;
            }
            *totals.entry(login).or_insert(0) += contributor.contributions;
        }
    }

    let mut merged: Vec<Collaborator> = totals
        .into_iter()
        .map(|(login, contributions)| Collaborator {
            login: login.to_string(),
            contributions,
        })
        .collect();
    merged.sort_by(|a, b| {
        b.contributions
            .cmp(&a.contributions)
            .then_with(|| a.login.cmp(&b.login))
    });
    merged.truncate(30);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(login: Option<&str>, contributions: u64) -> Contributor {
        Contributor {
            login: login.map(String::from),
            contributions,
        }
    }

    #[test]
    fn sums_across_repos_and_excludes_owner() {
        let per_repo = vec![
            vec![
                contributor(Some("octocat"), 50),
                contributor(Some("alice"), 10),
            ],
            vec![
                contributor(Some("alice"), 5),
                contributor(Some("bob"), 20),
                contributor(None, 99),
            ],
        ];
        let merged = merge_collaborators("octocat", &per_repo);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].login, "bob");
        assert_eq!(merged[0].contributions, 20);
        assert_eq!(merged[1].login, "alice");
        assert_eq!(merged[1].contributions, 15);
    }

    #[test]
    fn caps_at_thirty() {
        let many: Vec<Contributor> = (0..40u64)
            .map(|i| Contributor {
                login: Some(format!("user{i:02}")),
                contributions: 40 - i,
            })
            .collect();
        let merged = merge_collaborators("owner", &[many]);
        assert_eq!(merged.len(), 30);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(merge_collaborators("octocat", &[]).is_empty());
    }
}

use tracing::debug;

use super::classify::{is_attribution, is_poem_like};
use super::groups::Group;
use crate::settings::Heuristics;

/// Fold poem-like groups into the attribution group that follows them.
///
/// Walks the groups once, keeping an output stack. When an attribution
/// arrives, the contiguous run of poem-like groups at the top of the stack
/// (at most `lookback_cap` of them) is popped and re-pushed as one group
/// together with the attribution. Only earlier groups are ever consumed.
pub fn merge_attributions(groups: Vec<Group>, h: &Heuristics) -> Vec<Group> {
    let mut merged: Vec<Group> = Vec::with_capacity(groups.len());

    for group in groups {
        if merged.is_empty() || !is_attribution(group.as_str(), h) {
            merged.push(group);
            continue;
        }

        let run = poem_run_len(&merged, h);
        if run == 0 {
            merged.push(group);
            continue;
        }

        let start = merged.len() - run;
        let combined = Group::merge(merged[start..].iter().chain(std::iter::once(&group)));
        debug!(absorbed = run, "merged poem run into attribution");
        merged.truncate(start);
        merged.push(combined);
    }

    merged
}

/// Length of the poem-like run at the tail of `stack`, capped.
fn poem_run_len(stack: &[Group], h: &Heuristics) -> usize {
    stack
        .iter()
        .rev()
        .take(h.lookback_cap)
        .take_while(|g| is_poem_like(g.as_str(), h))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poem(n: usize) -> Group {
        Group::from(format!("stanza {n} line one\nstanza {n} line two\nstanza {n} line three").as_str())
    }

    fn texts(groups: &[Group]) -> Vec<&str> {
        groups.iter().map(Group::as_str).collect()
    }

    #[test]
    fn three_stanzas_and_dash_attribution_merge() {
        let groups = vec![poem(1), poem(2), poem(3), Group::from("\u{2014} Walt Whitman")];
        let out = merge_attributions(groups, &Heuristics::default());
        assert_eq!(out.len(), 1);
        let text = out[0].as_str();
        let p1 = text.find("stanza 1").unwrap();
        let p2 = text.find("stanza 2").unwrap();
        let p3 = text.find("stanza 3").unwrap();
        let attr = text.find("Walt Whitman").unwrap();
        assert!(p1 < p2 && p2 < p3 && p3 < attr);
        assert!(text.contains("line three\n\n\u{2014} Walt Whitman"));
    }

    #[test]
    fn lookback_stops_at_cap() {
        let mut groups: Vec<Group> = (1..=12).map(poem).collect();
        groups.push(Group::from("- Anonymous"));
        let out = merge_attributions(groups, &Heuristics::default());

        assert_eq!(out.len(), 3);
        assert_eq!(out[0], poem(1));
        assert_eq!(out[1], poem(2));
        assert_eq!(out[2].as_str().split("\n\n").count(), 11);
        assert!(out[2].as_str().starts_with("stanza 3 line one"));
    }

    #[test]
    fn lookback_respects_configured_cap() {
        let h = Heuristics {
            lookback_cap: 2,
            ..Heuristics::default()
        };
        let groups = vec![poem(1), poem(2), poem(3), Group::from("- Anonymous")];
        let out = merge_attributions(groups, &h);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], poem(1));
    }

    #[test]
    fn run_stops_at_prose() {
        let groups = vec![
            poem(1),
            Group::from("A single line of prose that is not a poem."),
            poem(2),
            Group::from("From The Collected Works"),
        ];
        let out = merge_attributions(groups, &Heuristics::default());
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], poem(1));
        assert_eq!(out[1].as_str(), "A single line of prose that is not a poem.");
        assert!(out[2].as_str().ends_with("From The Collected Works"));
    }

    #[test]
    fn attribution_without_poem_stays_alone() {
        let groups = vec![
            Group::from("Short quote."),
            Group::from("\u{2014} Somebody"),
        ];
        let out = merge_attributions(groups, &Heuristics::default());
        assert_eq!(texts(&out), vec!["Short quote.", "\u{2014} Somebody"]);
    }

    #[test]
    fn leading_attribution_is_kept() {
        let groups = vec![Group::from("- Nobody"), poem(1)];
        let out = merge_attributions(groups, &Heuristics::default());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_str(), "- Nobody");
    }

    #[test]
    fn merged_group_can_be_absorbed_again() {
        let groups = vec![poem(1), Group::from("- First"), Group::from("- Second")];
        let out = merge_attributions(groups, &Heuristics::default());
        assert_eq!(out.len(), 1);
        assert!(out[0].as_str().ends_with("- First\n\n- Second"));
    }
}

//! Unify per-chart category sequences into one label order.

use std::collections::{BTreeMap, BTreeSet};

/// Merge label sequences into one ordered list of distinct labels.
///
/// Without `preserve_order` the result is the sorted union. With it, every
/// adjacent pair `(a, b)` of every sequence requires `a` before `b`, and the
/// labels are emitted in topological layers, each layer in text order.
///
/// Conflicting sequences are resolved best-effort: when no label is free, the
/// smallest label among those with the fewest pending predecessors is
/// released on its own and layering resumes.
#[must_use]
pub fn merge_labels(sequences: &[Vec<String>], preserve_order: bool) -> Vec<String> {
    if preserve_order {
        topological_merge(sequences)
    } else {
        sequences
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn topological_merge(sequences: &[Vec<String>]) -> Vec<String> {
    // label -> labels that must come before it and are not yet emitted
    let mut pending: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for sequence in sequences {
        for label in sequence {
            pending.entry(label.as_str()).or_default();
        }
        for pair in sequence.windows(2) {
            if pair[0] != pair[1] {
                pending
                    .entry(pair[1].as_str())
                    .or_default()
                    .insert(pair[0].as_str());
            }
        }
    }

    let mut merged = Vec::with_capacity(pending.len());
    while !pending.is_empty() {
        let mut layer: Vec<&str> = pending
            .iter()
            .filter(|(_, before)| before.is_empty())
            .map(|(label, _)| *label)
            .collect();

        if layer.is_empty() {
            let Some(released) = pending
                .iter()
                .min_by_key(|&(label, before)| (before.len(), *label))
                .map(|(label, _)| *label)
            else {
                break;
            };
            tracing::warn!(
                label = released,
                "label sequences disagree on order, breaking cycle"
            );
            layer.push(released);
        }

        for label in &layer {
            pending.remove(label);
        }
        for before in pending.values_mut() {
            for label in &layer {
                before.remove(label);
            }
        }
        merged.extend(layer.into_iter().map(str::to_string));
    }
    merged
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;

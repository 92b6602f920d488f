use dashmap::DashMap;
use varscope_api::{MissedSuggestion, MissingParameterMapping, NamingDiagnostics};

/// Thread-safe increment-on-key aggregation of naming diagnostics.
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    missed: DashMap<MissedSuggestion, usize>,
    missing_parameters: DashMap<MissingParameterMapping, usize>,
}

impl DiagnosticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Missed suggestions with their occurrence counts, most frequent first.
    pub fn missed_suggestions(&self) -> Vec<(MissedSuggestion, usize)> {
        sorted_snapshot(&self.missed)
    }

    /// Parameters without a declared mapping, most frequent first.
    pub fn missing_parameter_mappings(&self) -> Vec<(MissingParameterMapping, usize)> {
        sorted_snapshot(&self.missing_parameters)
    }

    pub fn is_empty(&self) -> bool {
        self.missed.is_empty() && self.missing_parameters.is_empty()
    }
}

impl NamingDiagnostics for DiagnosticsCollector {
    fn missed_suggestion(&self, event: MissedSuggestion) {
        *self.missed.entry(event).or_insert(0) += 1;
    }

    fn missing_parameter_mapping(&self, event: MissingParameterMapping) {
        *self.missing_parameters.entry(event).or_insert(0) += 1;
    }
}

fn sorted_snapshot<K: Clone + Ord + std::hash::Hash + Eq>(map: &DashMap<K, usize>) -> Vec<(K, usize)> {
    let mut rows: Vec<(K, usize)> = map
        .iter()
        .map(|entry| (entry.key().clone(), *entry.value()))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn missed(name: &str) -> MissedSuggestion {
        MissedSuggestion {
            method_name: name.to_string(),
            owner: "a/B".to_string(),
            descriptor: "()V".to_string(),
        }
    }

    #[test]
    fn test_counts_are_aggregated_per_key() {
        let collector = DiagnosticsCollector::new();
        collector.missed_suggestion(missed("foo"));
        collector.missed_suggestion(missed("bar"));
        collector.missed_suggestion(missed("foo"));

        let rows = collector.missed_suggestions();
        assert_eq!(rows[0], (missed("foo"), 2));
        assert_eq!(rows[1], (missed("bar"), 1));
    }

    #[test]
    fn test_concurrent_increments() {
        let collector = Arc::new(DiagnosticsCollector::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let collector = Arc::clone(&collector);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        collector.missed_suggestion(missed("foo"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(collector.missed_suggestions()[0].1, 400);
    }
}

use crate::grammar::{AppliedLevels, GrammarTable};

/// Output of the substitution encoder.
#[derive(Debug, Clone)]
pub struct GrammarEncoding {
    /// Compressed symbol stream.
    pub symbols: String,
    /// Levels at which at least one rule fired; the decoder needs this set
    /// to know which levels to expand.
    pub applied: AppliedLevels,
}

/// Multi-level substitution encoder.
///
/// Rewrites a bit-string into a shorter symbol stream by repeatedly folding
/// rule patterns into their symbols until a full pass over the table changes
/// nothing.
pub struct GrammarEncoder<'a> {
    table: &'a GrammarTable,
}

impl<'a> GrammarEncoder<'a> {
    pub fn new(table: &'a GrammarTable) -> Self {
        Self { table }
    }

    /// Compresses a bit-string into a symbol stream.
    ///
    /// Each pass visits levels in ascending order and rules in declaration
    /// order; a rule whose pattern occurs replaces every non-overlapping
    /// occurrence, leftmost first, and later rules in the same pass see the
    /// already-updated data. Replacements above level 1 strictly shorten the
    /// data and level-1 rules cannot fire twice on the same character, so
    /// the fixed point is reached in finitely many passes.
    ///
    /// If no rule ever matches the output equals the input and the applied
    /// set stays empty.
    pub fn encode(&self, bits: &str) -> GrammarEncoding {
        let mut data = bits.to_owned();
        let mut applied = AppliedLevels::new();

        let mut pass = 0usize;
        let mut changed = true;
        while changed {
            changed = false;
            pass += 1;
            for level in self.table.levels() {
                for rule in level.rules() {
                    if data.contains(rule.expansion) {
                        data = data.replace(rule.expansion, rule.symbol);
                        applied.record(level.number);
                        changed = true;
                    }
                }
            }
            log::debug!("substitution pass {pass}: {} symbols", data.len());
        }

        GrammarEncoding { symbols: data, applied }
    }
}

use crate::grammar::{AppliedLevels, GrammarLevel, GrammarTable};

/// Inverse of the substitution encoder, driven by the recorded level set.
///
/// Expansion runs one pass per level, levels descending, skipping levels
/// that never fired during encoding. The single pass assumes that no
/// expansion reintroduces a symbol an already-processed level should have
/// consumed; when that assumption breaks the re-match is logged and left
/// alone rather than re-expanded, so the encoder and decoder stay symmetric.
pub struct GrammarDecoder<'a> {
    table: &'a GrammarTable,
}

impl<'a> GrammarDecoder<'a> {
    pub fn new(table: &'a GrammarTable) -> Self {
        Self { table }
    }

    /// Expands a symbol stream back toward a bit-string.
    ///
    /// Rules are traversed in the same declaration order the encoder used.
    /// If a required level is absent from `applied`, its symbols survive in
    /// the output unexpanded; that is not an error here, the caller decides
    /// what residual symbols mean.
    pub fn decode(&self, symbols: &str, applied: &AppliedLevels) -> String {
        let mut data = symbols.to_owned();
        for (idx, level) in self.table.levels().iter().enumerate().rev() {
            if !applied.contains(level.number) {
                continue;
            }
            for rule in level.rules() {
                if data.contains(rule.symbol) {
                    data = data.replace(rule.symbol, rule.expansion);
                }
            }
            self.flag_rematches(&data, idx, level, applied);
        }
        data
    }

    /// Logs any symbol of an already-processed level that reappeared after
    /// expanding `current`. Those symbols were fully replaced when their own
    /// level ran, so an occurrence here means an expansion recreated one.
    fn flag_rematches(
        &self,
        data: &str,
        current_idx: usize,
        current: &GrammarLevel,
        applied: &AppliedLevels,
    ) {
        for higher in &self.table.levels()[current_idx + 1..] {
            if !applied.contains(higher.number) {
                continue;
            }
            for rule in higher.rules() {
                if data.contains(rule.symbol) {
                    log::warn!(
                        "symbol {} of level {} reappeared after expanding level {}; leaving it unexpanded",
                        rule.symbol,
                        higher.number,
                        current.number
                    );
                }
            }
        }
    }
}

use crate::decode::GrammarDecoder;
use crate::encode::GrammarEncoder;
use crate::error::{Error, Result};
use crate::grammar::{AppliedLevels, GrammarTable};
use crate::loss::loss;
use crate::raster;
use crate::rle;
use std::path::Path;

/// Longest data prefix shown in log previews.
const PREVIEW_LEN: usize = 100;

/// The unit that would be persisted or transmitted: the run-length payload
/// plus everything needed to invert it.
#[derive(Debug, Clone)]
pub struct CompressedArtifact {
    /// Run-length-encoded symbol stream.
    pub data: String,
    /// Grammar levels that fired during encoding.
    pub applied: AppliedLevels,
    /// Source image width in pixels.
    pub width: u32,
    /// Source image height in pixels.
    pub height: u32,
}

/// Figures reported after a full compress/decompress cycle.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Length of the flattened bit-string.
    pub original_len: usize,
    /// Length of the final run-length payload.
    pub compressed_len: usize,
    /// Mismatch percentage between original and reconstruction.
    pub loss_pct: f64,
    /// Grammar levels that fired.
    pub applied: AppliedLevels,
}

impl PipelineReport {
    /// Size reduction as a percentage of the original bit-string.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_len == 0 {
            0.0
        } else {
            (self.original_len as f64 - self.compressed_len as f64) / self.original_len as f64
                * 100.0
        }
    }
}

/// Composes the two codecs end to end over a single image.
///
/// Everything downstream of the grammar table is created per image and
/// discarded afterwards; nothing is cached across invocations.
pub struct Pipeline<'a> {
    table: &'a GrammarTable,
}

impl<'a> Pipeline<'a> {
    pub fn new(table: &'a GrammarTable) -> Self {
        Self { table }
    }

    /// Bit-string to artifact: grammar substitution, then run-length.
    pub fn compress(&self, bits: &str, width: u32, height: u32) -> CompressedArtifact {
        let encoding = GrammarEncoder::new(self.table).encode(bits);
        log::info!("grammar-compressed: {}...", preview(&encoding.symbols));
        log::debug!("applied levels: {:?}", encoding.applied.sorted());

        let data = rle::rle_encode(&encoding.symbols);
        log::info!("run-length-compressed: {}...", preview(&data));

        CompressedArtifact {
            data,
            applied: encoding.applied,
            width,
            height,
        }
    }

    /// Artifact back to a (best-effort) bit-string.
    pub fn decompress(&self, artifact: &CompressedArtifact) -> String {
        let symbols = rle::rle_decode(&artifact.data);
        GrammarDecoder::new(self.table).decode(&symbols, &artifact.applied)
    }

    /// Full cycle: load, compress, immediately decompress, save, measure.
    ///
    /// Decoding straight after encoding measures achievable compression and
    /// validates the reconstruction in one run; a deployment would persist
    /// the artifact and defer the decode half.
    pub fn run(&self, input: &Path, output: &Path) -> Result<PipelineReport> {
        let (bits, width, height) = raster::load_bilevel(input)?;
        if bits.is_empty() {
            return Err(Error::EmptyInput);
        }
        log::info!("loaded {width}x{height} image, {} pixels", bits.len());

        let artifact = self.compress(&bits, width, height);
        let reconstructed = self.decompress(&artifact);
        raster::save_bilevel(&reconstructed, width, height, output)?;

        let loss_pct = loss(&bits, &reconstructed)?;
        Ok(PipelineReport {
            original_len: bits.len(),
            compressed_len: artifact.data.len(),
            loss_pct,
            applied: artifact.applied,
        })
    }
}

fn preview(data: &str) -> &str {
    data.get(..PREVIEW_LEN).unwrap_or(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_decompress_roundtrip() {
        let table = GrammarTable::layered();
        let pipeline = Pipeline::new(&table);
        let bits = "0011001111110000";
        let artifact = pipeline.compress(bits, 4, 4);
        assert_eq!(pipeline.decompress(&artifact), bits);
    }

    #[test]
    fn test_artifact_carries_dimensions() {
        let table = GrammarTable::layered();
        let artifact = Pipeline::new(&table).compress("0011", 2, 2);
        assert_eq!((artifact.width, artifact.height), (2, 2));
        assert!(!artifact.applied.is_empty());
    }

    #[test]
    fn test_compression_ratio() {
        let report = PipelineReport {
            original_len: 200,
            compressed_len: 50,
            loss_pct: 0.0,
            applied: AppliedLevels::new(),
        };
        assert_eq!(report.compression_ratio(), 75.0);
    }

    #[test]
    fn test_compression_ratio_empty_input() {
        let report = PipelineReport {
            original_len: 0,
            compressed_len: 0,
            loss_pct: 0.0,
            applied: AppliedLevels::new(),
        };
        assert_eq!(report.compression_ratio(), 0.0);
    }

    #[test]
    fn test_run_full_cycle() {
        let table = GrammarTable::layered();
        let pipeline = Pipeline::new(&table);

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");
        raster::save_bilevel("0110100110010110", 4, 4, &input).unwrap();

        let report = pipeline.run(&input, &output).unwrap();
        assert_eq!(report.original_len, 16);
        assert_eq!(report.loss_pct, 0.0);

        let (reconstructed, _, _) = raster::load_bilevel(&output).unwrap();
        assert_eq!(reconstructed, "0110100110010110");
    }

    #[test]
    fn test_preview_caps_length() {
        let long = "A".repeat(500);
        assert_eq!(preview(&long).len(), PREVIEW_LEN);
        assert_eq!(preview("short"), "short");
    }
}

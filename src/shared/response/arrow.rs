use arrow_ipc::writer::{DictionaryTracker, IpcDataGenerator, IpcWriteOptions};
use arrow_schema::ArrowError;

use crate::engine::frame::Frame;
use crate::shared::response::render::{FrameRenderer, OutputFormat, RenderError};

type ArrowResult<T> = Result<T, ArrowError>;

const CONTINUATION_MARKER: u32 = 0xFFFF_FFFF;

/// Writes each frame as a complete Arrow IPC stream: schema, one record
/// batch, end-of-stream marker. Streams are concatenated in frame order.
pub struct ArrowRenderer;

impl FrameRenderer for ArrowRenderer {
    fn render(&self, frames: &[Frame]) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        for frame in frames {
            let mut encoder = ArrowStreamEncoder::new();
            encoder.write_frame(frame, &mut out)?;
        }
        Ok(out)
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Arrow
    }
}

pub struct ArrowStreamEncoder {
    data_gen: IpcDataGenerator,
    dictionary_tracker: DictionaryTracker,
    write_options: IpcWriteOptions,
}

impl ArrowStreamEncoder {
    pub fn new() -> Self {
        Self {
            data_gen: IpcDataGenerator::default(),
            dictionary_tracker: DictionaryTracker::new(true),
            write_options: IpcWriteOptions::default(),
        }
    }

    /// Appends one full stream for `frame` to `out`.
    pub fn write_frame(&mut self, frame: &Frame, out: &mut Vec<u8>) -> ArrowResult<()> {
        let batch = frame.to_record_batch()?;

        let schema = self.data_gen.schema_to_bytes_with_dictionary_tracker(
            batch.schema_ref(),
            &mut self.dictionary_tracker,
            &self.write_options,
        );
        arrow_ipc::writer::write_message(&mut *out, schema, &self.write_options)?;

        let (dict_batches, record_data) =
            self.data_gen
                .encoded_batch(&batch, &mut self.dictionary_tracker, &self.write_options)?;
        for encoded in dict_batches {
            arrow_ipc::writer::write_message(&mut *out, encoded, &self.write_options)?;
        }
        arrow_ipc::writer::write_message(&mut *out, record_data, &self.write_options)?;

        out.extend_from_slice(&CONTINUATION_MARKER.to_le_bytes());
        out.extend_from_slice(&0i32.to_le_bytes());
        Ok(())
    }
}

impl Default for ArrowStreamEncoder {
    fn default() -> Self {
        Self::new()
    }
}

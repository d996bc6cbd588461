use crate::conversion::error::ConversionError;
use crate::geometry::fundamental_constants::COMPONENTS_IN_POSITION;
use std::io::{BufRead, ErrorKind};

const BYTES_IN_WORD: usize = size_of::<u32>();

/// Little-endian record reads over a buffered stream. `None` means the stream
/// ran out before the requested record was complete; that is not an error.
pub(crate) struct RecordSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> RecordSource<R> {
    #[must_use]
    pub(crate) fn new(reader: R) -> Self {
        Self { reader }
    }

    pub(crate) fn is_exhausted(&mut self) -> Result<bool, ConversionError> {
        let available = self.reader.fill_buf().map_err(ConversionError::io)?;
        Ok(available.is_empty())
    }

    /// Next `\n`-terminated line without its terminator (and without a trailing `\r`).
    pub(crate) fn read_line(&mut self) -> Result<Option<String>, ConversionError> {
        let mut line: Vec<u8> = Vec::new();
        let consumed = self.reader.read_until(b'\n', &mut line).map_err(ConversionError::io)?;
        if consumed == 0 {
            return Ok(None);
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }

    /// Skips leading whitespace, then takes bytes up to (not including) the next whitespace.
    pub(crate) fn read_token(&mut self) -> Result<Option<String>, ConversionError> {
        self.skip_whitespace()?;

        let mut token: Vec<u8> = Vec::new();
        loop {
            let available = self.reader.fill_buf().map_err(ConversionError::io)?;
            if available.is_empty() {
                break;
            }
            let length = available.iter().take_while(|byte| !byte.is_ascii_whitespace()).count();
            let delimiter_found = length < available.len();
            token.extend_from_slice(&available[..length]);
            self.reader.consume(length);
            if delimiter_found {
                break;
            }
        }

        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&token).into_owned()))
        }
    }

    /// Drops blanks up to and including the next `\n`, stopping early at anything else.
    pub(crate) fn finish_text_line(&mut self) -> Result<(), ConversionError> {
        loop {
            let available = self.reader.fill_buf().map_err(ConversionError::io)?;
            let Some(&byte) = available.first() else {
                return Ok(());
            };
            match byte {
                b' ' | b'\t' | b'\r' => self.reader.consume(1),
                b'\n' => {
                    self.reader.consume(1);
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }
    }

    pub(crate) fn read_u8(&mut self) -> Result<Option<u8>, ConversionError> {
        Ok(self.read_array::<1>()?.map(|bytes| bytes[0]))
    }

    pub(crate) fn read_i32(&mut self) -> Result<Option<i32>, ConversionError> {
        Ok(self.read_array::<BYTES_IN_WORD>()?.map(i32::from_le_bytes))
    }

    pub(crate) fn read_f32_triplet(&mut self) -> Result<Option<[f32; COMPONENTS_IN_POSITION]>, ConversionError> {
        let Some(bytes) = self.read_array::<{ COMPONENTS_IN_POSITION * BYTES_IN_WORD }>()? else {
            return Ok(None);
        };
        let words: [u32; COMPONENTS_IN_POSITION] = bytemuck::pod_read_unaligned(&bytes);
        Ok(Some(words.map(|word| f32::from_bits(u32::from_le(word)))))
    }

    pub(crate) fn read_i32_block(&mut self, count: usize) -> Result<Option<Vec<i32>>, ConversionError> {
        Ok(self.read_words(count)?.map(|words| words.into_iter().map(|word| u32::from_le(word) as i32).collect()))
    }

    pub(crate) fn read_f32_block(&mut self, count: usize) -> Result<Option<Vec<f32>>, ConversionError> {
        Ok(self.read_words(count)?.map(|words| words.into_iter().map(|word| f32::from_bits(u32::from_le(word))).collect()))
    }

    fn read_words(&mut self, count: usize) -> Result<Option<Vec<u32>>, ConversionError> {
        let mut bytes = vec![0_u8; count * BYTES_IN_WORD];
        if !self.fill_exactly(&mut bytes)? {
            return Ok(None);
        }
        Ok(Some(bytemuck::pod_collect_to_vec::<u8, u32>(&bytes)))
    }

    fn read_array<const N: usize>(&mut self) -> Result<Option<[u8; N]>, ConversionError> {
        let mut bytes = [0_u8; N];
        if self.fill_exactly(&mut bytes)? {
            Ok(Some(bytes))
        } else {
            Ok(None)
        }
    }

    fn fill_exactly(&mut self, buffer: &mut [u8]) -> Result<bool, ConversionError> {
        match self.reader.read_exact(buffer) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == ErrorKind::UnexpectedEof => Ok(false),
            Err(error) => Err(ConversionError::io(error)),
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), ConversionError> {
        loop {
            let available = self.reader.fill_buf().map_err(ConversionError::io)?;
            if available.is_empty() {
                return Ok(());
            }
            let length = available.iter().take_while(|byte| byte.is_ascii_whitespace()).count();
            let content_found = length < available.len();
            self.reader.consume(length);
            if content_found {
                return Ok(());
            }
        }
    }
}

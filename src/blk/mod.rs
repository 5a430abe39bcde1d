//! Core block-file reader module.

pub mod block;
pub mod error;
pub mod hash;
pub mod models;
pub mod script;
pub mod tx;
pub mod varint;
mod utils;

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt};
use log::{debug, info, trace};

pub use block::parse_block;
pub use error::{BlkError, Result};
use models::{Block, BlockPos};
use script::{AddressResolver, NetworkParams, NoAddressResolver};
pub use tx::{parse_tx, parse_txs};

/// A sequential cursor over a blockchain's file-per-segment storage layout.
///
/// Holds exactly one open segment file at a time and reads length-prefixed
/// raw block records from it, transparently advancing to the next segment
/// file when the current one is exhausted. Not safe for concurrent use:
/// one instance is one logical stream with a single reader.
pub struct Blockchain<R: AddressResolver = NoAddressResolver> {
    path: PathBuf,
    magic: [u8; 4],
    params: NetworkParams,
    resolver: R,
    current_id: u32,
    current_file: File,
}

impl Blockchain<NoAddressResolver> {
    /// Open the blockchain storage at `path`, positioning on the first
    /// segment file. Output addresses stay empty; use
    /// [`Blockchain::with_resolver`] to plug in address resolution.
    ///
    /// # Errors
    /// Returns an error if the first segment file cannot be opened.
    pub fn new(path: impl AsRef<Path>, magic: [u8; 4], params: NetworkParams) -> Result<Self> {
        Self::with_resolver(path, magic, params, NoAddressResolver)
    }
}

impl<R: AddressResolver> Blockchain<R> {
    /// Open the blockchain storage at `path` with a caller-supplied
    /// script-to-address resolver.
    pub fn with_resolver(
        path: impl AsRef<Path>,
        magic: [u8; 4],
        params: NetworkParams,
        resolver: R,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let current_file = File::open(segment_path(&path, 0))?;
        info!("Opened blockchain storage at {}", path.display());

        Ok(Self {
            path,
            magic,
            params,
            resolver,
            current_id: 0,
            current_file,
        })
    }

    /// The ordinal of the currently open segment file.
    pub fn current_segment(&self) -> u32 {
        self.current_id
    }

    /// Read and parse the next block, rolling over to the next segment file
    /// when the current one is exhausted.
    ///
    /// # Errors
    /// - [`BlkError::EndOfChain`] when no further segment file exists;
    /// - [`BlkError::BadMagic`] / [`BlkError::UnexpectedEnd`] on corruption;
    /// - any block-decoding error from the record payload.
    pub fn next_block(&mut self) -> Result<Block> {
        let (raw, pos) = self.next_raw()?;
        let mut block = parse_block(&raw, &self.params, &self.resolver)?;
        block.pos = Some(pos);
        Ok(block)
    }

    /// Advance past the next block without parsing its payload.
    pub fn skip_block(&mut self) -> Result<()> {
        self.next_raw().map(|_| ())
    }

    /// Reopen the given segment file and position at an absolute offset.
    ///
    /// The caller is responsible for the offset landing on a record
    /// boundary and for tracking block height externally.
    pub fn skip_to(&mut self, file_id: u32, offset: u64) -> Result<()> {
        // Opening before assigning keeps the old handle until the new one
        // exists; the assignment drops (closes) it.
        let file = File::open(segment_path(&self.path, file_id))?;
        self.current_file = file;
        self.current_id = file_id;
        self.current_file.seek(SeekFrom::Start(offset))?;
        debug!("Repositioned to segment {} offset {}", file_id, offset);
        Ok(())
    }

    /// Iterate over the remaining blocks, ending cleanly at end of chain.
    pub fn iter_blocks(&mut self) -> Blocks<'_, R> {
        Blocks { chain: self }
    }

    /// Read the next raw record, rolling over to the next segment once.
    fn next_raw(&mut self) -> Result<(Vec<u8>, BlockPos)> {
        if let Some(found) = self.fetch_block()? {
            return Ok(found);
        }
        self.open_next_segment()?;
        match self.fetch_block()? {
            Some(found) => Ok(found),
            None => Err(BlkError::EndOfChain {
                last_segment: self.current_id,
            }),
        }
    }

    /// Read one `[magic][length][payload]` record from the current segment.
    ///
    /// A clean end-of-file at a record boundary yields `Ok(None)` (segment
    /// exhausted); end-of-file anywhere inside a record is a truncation
    /// error, and a marker mismatch is corruption, never exhaustion.
    fn fetch_block(&mut self) -> Result<Option<(Vec<u8>, BlockPos)>> {
        let mut magic = [0u8; 4];
        let mut filled = 0;
        while filled < magic.len() {
            let n = self.current_file.read(&mut magic[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled == 0 {
            trace!("Segment {} exhausted", self.current_id);
            return Ok(None);
        }
        if filled < magic.len() {
            return Err(BlkError::UnexpectedEnd {
                context: "record magic",
                needed: magic.len(),
                remaining: filled,
            });
        }
        if magic != self.magic {
            return Err(BlkError::BadMagic {
                expected: self.magic,
                found: magic,
            });
        }

        let size = self
            .current_file
            .read_u32::<LittleEndian>()
            .map_err(|e| truncated(e, "record length", 4))?;
        let mut raw = vec![0u8; size as usize];
        self.current_file
            .read_exact(&mut raw)
            .map_err(|e| truncated(e, "record payload", size as usize))?;

        let offset = self.current_file.stream_position()?;
        trace!(
            "Read {}-byte record from segment {}, now at offset {}",
            size,
            self.current_id,
            offset
        );

        Ok(Some((
            raw,
            BlockPos {
                file_id: self.current_id,
                pos: offset,
            },
        )))
    }

    /// Open the segment file after the current one, releasing the exhausted
    /// handle. A missing file is the end of the chain.
    fn open_next_segment(&mut self) -> Result<()> {
        let next_id = self.current_id + 1;
        let file = match File::open(segment_path(&self.path, next_id)) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(BlkError::EndOfChain {
                    last_segment: self.current_id,
                })
            }
            Err(e) => return Err(e.into()),
        };
        self.current_file = file;
        self.current_id = next_id;
        info!("Advanced to segment file {}", next_id);
        Ok(())
    }
}

/// Iterator over the blocks remaining in a chain.
pub struct Blocks<'a, R: AddressResolver> {
    chain: &'a mut Blockchain<R>,
}

impl<R: AddressResolver> Iterator for Blocks<'_, R> {
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.chain.next_block() {
            Ok(block) => Some(Ok(block)),
            Err(e) if e.is_end_of_chain() => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Path of a segment file: `blkNNNN.dat` with a 1-based ordinal.
fn segment_path(path: &Path, id: u32) -> PathBuf {
    path.join(format!("blk{:04}.dat", id + 1))
}

/// Map a mid-record end-of-file onto a truncation error.
fn truncated(err: std::io::Error, context: &'static str, needed: usize) -> BlkError {
    if err.kind() == ErrorKind::UnexpectedEof {
        BlkError::UnexpectedEnd {
            context,
            needed,
            remaining: 0,
        }
    } else {
        BlkError::Io(err)
    }
}

//! Generic Buffered Reader
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

#[derive(Debug)]
pub enum BufferedReader {
    /// Readable `RINEX`
    PlainFile(BufReader<File>),
    /// gzip compressed RINEX
    #[cfg(feature = "flate2")]
    GzFile(BufReader<GzDecoder<File>>),
}

impl BufferedReader {
    /// Opens this file. With `flate2` enabled, ".gz" files are decompressed on the fly.
    pub fn new(path: &Path) -> std::io::Result<Self> {
        let fd = File::open(path)?;

        #[cfg(feature = "flate2")]
        {
            if path.extension().map(|ext| ext == "gz").unwrap_or(false) {
                return Ok(Self::GzFile(BufReader::new(GzDecoder::new(fd))));
            }
        }

        Ok(Self::PlainFile(BufReader::new(fd)))
    }

    /// Opens this gzip compressed file
    #[cfg(feature = "flate2")]
    pub fn gzip(path: &Path) -> std::io::Result<Self> {
        let fd = File::open(path)?;
        Ok(Self::GzFile(BufReader::new(GzDecoder::new(fd))))
    }
}

impl Read for BufferedReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, std::io::Error> {
        match self {
            Self::PlainFile(h) => h.read(buf),
            #[cfg(feature = "flate2")]
            Self::GzFile(h) => h.read(buf),
        }
    }
}

impl std::io::BufRead for BufferedReader {
    fn fill_buf(&mut self) -> Result<&[u8], std::io::Error> {
        match self {
            Self::PlainFile(h) => h.fill_buf(),
            #[cfg(feature = "flate2")]
            Self::GzFile(h) => h.fill_buf(),
        }
    }
    fn consume(&mut self, s: usize) {
        match self {
            Self::PlainFile(h) => h.consume(s),
            #[cfg(feature = "flate2")]
            Self::GzFile(h) => h.consume(s),
        }
    }
}

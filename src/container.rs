use std::path::{Path};

use super::{Result, Dataset, Shape};
use super::io::{load_frame};

/// What `Packer::pack()` did with a `Dataset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new array was created. `failed` images could not be decoded and
    /// their slices were left at the fill value.
    Written {name: String, count: usize, failed: usize},

    /// An array of the same name already existed, and was left untouched.
    Exists {name: String},
}

/// Totals over a run's `Outcome`s.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Arrays created.
    pub written: usize,

    /// Datasets skipped because their name was taken.
    pub skipped: usize,

    /// Images that could not be decoded, across all written arrays.
    pub failed: usize,
}

impl Summary {
    pub fn of(outcomes: &[Outcome]) -> Self {
        outcomes.iter().fold(Summary::default(), |mut s, outcome| {
            match outcome {
                Outcome::Written {failed, ..} => { s.written += 1; s.failed += failed; },
                Outcome::Exists {..} => { s.skipped += 1; },
            }
            s
        })
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} written, {} skipped, {} images failed", self.written, self.skipped, self.failed)
    }
}

// ----------------------------------------------------------------------------

/// An HDF5 file open for appending, with a target group and an optional fixed
/// shape. The file is closed when the `Packer` is dropped.
pub struct Packer {
    file: hdf5::File,
    root: String,
    shape: Option<Shape>,
}

impl Packer {
    /// Opens `path` read/write, creating it if absent.
    pub fn open(path: &Path, root: &str, shape: Option<Shape>) -> Result<Self> {
        log::info!("Opening or creating {}", path.display());
        let file = hdf5::File::append(path)?;
        log::debug!("Opened {} successfully", path.display());
        Ok(Packer {file, root: root.to_owned(), shape})
    }

    /// The group that receives the arrays, created along with any missing
    /// parents.
    pub fn require_group(&self) -> Result<hdf5::Group> {
        let mut group = self.file.group("/")?;
        for part in self.root.split('/').filter(|p| !p.is_empty()) {
            group = if group.link_exists(part) {
                group.group(part)?
            } else {
                log::debug!("Creating group {} in {}", part, group.name());
                group.create_group(part)?
            };
        }
        Ok(group)
    }

    /// Writes `dataset` as a new `(count, height, width)` array of `u8`.
    ///
    /// Returns an error only if the shape cannot be determined or the file
    /// cannot be written. Images that fail to decode are logged and skipped.
    pub fn pack(&self, dataset: &Dataset) -> Result<Outcome> {
        let shape = Shape::resolve(self.shape, dataset)?;
        let dims = shape.dims(dataset.files.len());
        let group = self.require_group()?;
        if group.link_exists(&dataset.name) {
            log::warn!("Name {} already exists in group {}! Skipping...", dataset.name, self.root);
            return Ok(Outcome::Exists {name: dataset.name.clone()});
        }
        log::info!("Creating dataset {} with shape {:?}", dataset.name, dims);
        let array = group.new_dataset::<u8>().shape(dims).create(dataset.name.as_str())?;
        let mut failed = 0;
        for (i, path) in dataset.files.iter().enumerate() {
            log::debug!("Opening image file {}", path.display());
            let frame = match load_frame(path, shape) {
                Ok(frame) => frame,
                Err(e) => {
                    log::error!("Could not open file {}! Skipping... ({})", path.display(), e);
                    failed += 1;
                    continue;
                },
            };
            array.write_slice(frame.view()?, (i, .., ..))?;
        }
        Ok(Outcome::Written {name: dataset.name.clone(), count: dataset.files.len(), failed})
    }

    /// Calls `pack()` on each of `datasets` in order, stopping at the first
    /// error.
    pub fn pack_all(&self, datasets: &[Dataset]) -> Result<Vec<Outcome>> {
        datasets.iter().map(|d| self.pack(d)).collect()
    }
}

// ----------------------------------------------------------------------------

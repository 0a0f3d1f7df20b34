//! Scratch dataset layout on disk.

use std::path::{Path, PathBuf};

use image::GrayImage;
use tempfile::TempDir;

/// Temporary `images/`, `masks/` and `output/` folders
pub struct TestDataset {
    root: TempDir,
}

impl TestDataset {
    /// Create the dataset with empty `images/` and `masks/` folders.
    ///
    /// `output/` is left for the code under test to create.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("images")).expect("Failed to create images dir");
        std::fs::create_dir_all(root.path().join("masks")).expect("Failed to create masks dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.path().join("images")
    }

    pub fn masks_dir(&self) -> PathBuf {
        self.root.path().join("masks")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("output")
    }

    /// Write an image into `images/`, format chosen by extension.
    pub fn add_image(&self, name: &str, image: &GrayImage) -> PathBuf {
        let path = self.images_dir().join(name);
        image.save(&path).expect("Failed to write image");
        path
    }

    /// Write a mask into `masks/` under `m` + `image_name`.
    pub fn add_mask(&self, image_name: &str, mask: &GrayImage) -> PathBuf {
        let path = self.masks_dir().join(format!("m{image_name}"));
        mask.save(&path).expect("Failed to write mask");
        path
    }

    /// Write raw bytes into `images/`.
    pub fn add_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.images_dir().join(name);
        std::fs::write(&path, bytes).expect("Failed to write file");
        path
    }

    /// Write a file relative to the dataset root.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Decode an output image as grayscale.
    pub fn read_output(&self, name: &str) -> GrayImage {
        image::open(self.output_dir().join(name))
            .expect("Failed to read output")
            .to_luma8()
    }

    /// Sorted file names in `output/`.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output_dir())
            .expect("Failed to list output dir")
            .map(|e| e.expect("Bad dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

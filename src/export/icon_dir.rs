use std::io::{self, Write};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::RgbaImage;

use crate::error::{validate_ico_size, IconError, Result};

/// Validate ICO frame sizes and order them smallest-first without duplicates.
pub fn frame_sizes(sizes: &[u32]) -> Result<Vec<u32>> {
    if sizes.is_empty() {
        return Err(IconError::NoSizes);
    }
    let mut sizes = sizes
        .iter()
        .map(|&s| validate_ico_size(s))
        .collect::<Result<Vec<_>>>()?;
    sizes.sort_unstable();
    sizes.dedup();
    Ok(sizes)
}

/// Pack rendered frames into an icon directory, in the order given.
pub fn build_icon_dir(frames: impl IntoIterator<Item = RgbaImage>) -> io::Result<IconDir> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for frame in frames {
        let (width, height) = frame.dimensions();
        let image = IconImage::from_rgba_data(width, height, frame.into_raw());
        dir.add_entry(IconDirEntry::encode(&image)?);
    }
    Ok(dir)
}

/// Serialize an icon directory and flush the writer.
pub fn write_icon_dir<W: Write>(dir: &IconDir, mut writer: W) -> io::Result<()> {
    dir.write(&mut writer)?;
    writer.flush()
}

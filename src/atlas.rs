//! Sprite atlas registry - sheet loading, cell-size inference and slicing
//!
//! Every sheet is carved into *groups* (one variant's block of cells) and
//! each group into individual sprite cells addressed as `"<group><index>"`,
//! index running row-major from the top-left. Group offsets are measured in
//! whole blocks of `cols x rows` cells, not in cells or pixels: offset
//! `(2, 0)` on a default grid selects the pixel region starting at
//! `(2 * 3 * S, 0)`. Sheets are authored against this addressing, so it must
//! not change.

use std::collections::HashMap;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::config::AtlasConfig;
use crate::error::{AtlasError, Warning};
use crate::tables;
use crate::tint::{load_tint_table, TintLoadResult, TintTable};

/// Cell size used when the reference sheet is not a 3x7 grid.
pub const DEFAULT_CELL_SIZE: u32 = 50;

/// Default group grid: 3 columns by 7 rows of cells, one per cat pose.
pub const GROUP_COLS: u32 = 3;
pub const GROUP_ROWS: u32 = 7;

/// Transparent fill for freshly allocated group and cell buffers.
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Registry of loaded spritesheets, sliced groups and sprite cells.
///
/// Built once at startup via [`SpriteAtlas::load_all`] and read-only
/// afterwards. Construct it explicitly in the application's startup sequence
/// and pass it by reference to rendering code.
#[derive(Debug)]
pub struct SpriteAtlas {
    config: AtlasConfig,
    size: Option<u32>,
    spritesheets: HashMap<String, RgbaImage>,
    groups: HashMap<String, RgbaImage>,
    sprites: HashMap<String, RgbaImage>,
    cat_tints: TintLoadResult,
    white_patches_tints: TintLoadResult,
    warnings: Vec<Warning>,
}

impl SpriteAtlas {
    /// Create an empty atlas. A `cell_size` in the config overrides the
    /// size normally inferred from the reference line art.
    pub fn new(config: AtlasConfig) -> Self {
        let size = config.cell_size;
        Self {
            config,
            size,
            spritesheets: HashMap::new(),
            groups: HashMap::new(),
            sprites: HashMap::new(),
            cat_tints: TintLoadResult::default(),
            white_patches_tints: TintLoadResult::default(),
            warnings: Vec::new(),
        }
    }

    /// The shared cell size, once established.
    pub fn cell_size(&self) -> Option<u32> {
        self.size
    }

    /// A full decoded spritesheet by name.
    pub fn sheet(&self, name: &str) -> Option<&RgbaImage> {
        self.spritesheets.get(name)
    }

    /// A sliced group buffer by name.
    pub fn group(&self, name: &str) -> Option<&RgbaImage> {
        self.groups.get(name)
    }

    /// A single sprite cell by key, e.g. `"lines0"` or `"eyesAMBER14"`.
    pub fn sprite(&self, key: &str) -> Option<&RgbaImage> {
        self.sprites.get(key)
    }

    /// All sheets, keyed by name.
    pub fn sheets(&self) -> &HashMap<String, RgbaImage> {
        &self.spritesheets
    }

    /// All groups, keyed by name.
    pub fn groups(&self) -> &HashMap<String, RgbaImage> {
        &self.groups
    }

    /// All sprite cells, keyed by `"<group><index>"`.
    pub fn sprites(&self) -> &HashMap<String, RgbaImage> {
        &self.sprites
    }

    /// Tints applied to pelt colours, keyed by colour group.
    pub fn cat_tints(&self) -> &TintTable {
        &self.cat_tints.table
    }

    /// Tints applied to white patches.
    pub fn white_patches_tints(&self) -> &TintTable {
        &self.white_patches_tints.table
    }

    /// Full load result for the pelt tint table, including its outcome.
    pub fn cat_tint_load(&self) -> &TintLoadResult {
        &self.cat_tints
    }

    /// Full load result for the white-patch tint table.
    pub fn white_patches_tint_load(&self) -> &TintLoadResult {
        &self.white_patches_tints
    }

    /// Non-fatal diagnostics accumulated while loading.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Load both tint dictionaries from `<assets>/dicts/`.
    ///
    /// Best-effort: a missing or corrupt file leaves the corresponding table
    /// empty and records a warning.
    pub fn load_tints(&mut self) {
        let dicts = self.config.assets_dir.join("dicts");
        self.cat_tints = load_tint_table(&dicts.join("tint.json"));
        if let Some(warning) = &self.cat_tints.warning {
            self.warnings.push(warning.clone());
        }
        self.white_patches_tints = load_tint_table(&dicts.join("white_patches_tint.json"));
        if let Some(warning) = &self.white_patches_tints.warning {
            self.warnings.push(warning.clone());
        }
    }

    /// Decode the image at `path` and register it as a sheet under `name`.
    ///
    /// Per-pixel transparency is retained. A decode failure is fatal for the
    /// asset set being built, since later slicing assumes the sheet exists.
    pub fn load_spritesheet(&mut self, path: &Path, name: &str) -> Result<(), AtlasError> {
        let sheet = image::open(path)
            .map_err(|source| AtlasError::Sheet {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        self.spritesheets.insert(name.to_string(), sheet);
        Ok(())
    }

    /// Establish the shared cell size from the reference sheet's dimensions.
    ///
    /// An explicitly configured size wins and the reference is not read.
    /// Otherwise the reference must be a 3x7 grid of square cells; anything
    /// else falls back to [`DEFAULT_CELL_SIZE`] with a recorded warning.
    pub fn infer_cell_size(&mut self, reference: &Path) -> Result<u32, AtlasError> {
        if let Some(size) = self.size {
            return Ok(size);
        }

        let (width, height) =
            image::image_dimensions(reference).map_err(|source| AtlasError::Reference {
                path: reference.to_path_buf(),
                source,
            })?;

        let size = if width * GROUP_ROWS == height * GROUP_COLS {
            width / GROUP_COLS
        } else {
            self.warnings.push(Warning::new(format!(
                "reference sheet '{}' is {}x{}, not a {}x{} grid; falling back to cell size {}",
                reference.display(),
                width,
                height,
                GROUP_COLS,
                GROUP_ROWS,
                DEFAULT_CELL_SIZE
            )));
            DEFAULT_CELL_SIZE
        };
        self.size = Some(size);
        Ok(size)
    }

    /// Slice one variant block out of a loaded sheet with the default
    /// [`GROUP_COLS`] x [`GROUP_ROWS`] grid.
    pub fn make_group(
        &mut self,
        sheet: &str,
        offset: (u32, u32),
        name: &str,
    ) -> Result<(), AtlasError> {
        self.make_group_grid(sheet, offset, name, GROUP_COLS, GROUP_ROWS)
    }

    /// [`SpriteAtlas::make_group`] with an explicit cell grid.
    ///
    /// The block at `offset` (in whole `cols x rows` blocks) is copied into a
    /// transparent `cols*S x rows*S` buffer, stored as a group under `name`,
    /// and split row-major into `cols * rows` cells stored under
    /// `"<name>0"` through `"<name>(cols*rows - 1)"`. Any group or cells
    /// previously stored under `name` are replaced. The source rectangle is
    /// clamped to the sheet bounds; pixels outside it stay transparent.
    pub fn make_group_grid(
        &mut self,
        sheet: &str,
        offset: (u32, u32),
        name: &str,
        cols: u32,
        rows: u32,
    ) -> Result<(), AtlasError> {
        let size = self.size.ok_or(AtlasError::SizeUnset)?;
        let source = self
            .spritesheets
            .get(sheet)
            .ok_or_else(|| AtlasError::UnknownSheet(sheet.to_string()))?;

        // Offsets address whole blocks, not cells.
        let src_x = offset.0 * cols * size;
        let src_y = offset.1 * rows * size;
        let group = copy_region(source, src_x, src_y, cols * size, rows * size);

        for index in 0..cols * rows {
            let cell_x = (index % cols) * size;
            let cell_y = (index / cols) * size;
            let cell = copy_region(&group, cell_x, cell_y, size, size);
            self.sprites.insert(format!("{}{}", name, index), cell);
        }
        self.groups.insert(name.to_string(), group);
        Ok(())
    }

    /// Run the full bulk build: tints, cell size, every sheet, every group.
    ///
    /// Sheet order and the variant tables in [`crate::tables`] together
    /// determine the complete set of cell keys this atlas exposes; which
    /// files exist on disk only decides whether the build succeeds at all.
    pub fn load_all(&mut self) -> Result<(), AtlasError> {
        self.load_tints();

        let assets = self.config.assets_dir.clone();
        self.infer_cell_size(&assets.join("lineart.png"))?;

        for &name in tables::SPRITESHEETS {
            let file = if self.config.seasonal_lineart && name.contains("lineart") {
                format!("seasonal{}.png", name)
            } else {
                format!("{}.png", name)
            };
            self.load_spritesheet(&assets.join(file), name)?;
        }

        self.slice_line_art()?;
        self.slice_fades()?;
        self.slice_eyes()?;
        self.slice_white_patches()?;
        self.slice_pelts()?;
        self.slice_tortie_masks()?;
        self.slice_skins()?;
        self.slice_scars()?;
        self.slice_accessories()?;
        Ok(())
    }

    fn slice_line_art(&mut self) -> Result<(), AtlasError> {
        self.make_group("lineart", (0, 0), "lines")?;
        self.make_group("shadersnewwhite", (0, 0), "shaders")?;
        self.make_group("lightingnew", (0, 0), "lighting")?;
        self.make_group("lineartdead", (0, 0), "lineartdead")?;
        self.make_group("lineartdf", (0, 0), "lineartdf")?;
        Ok(())
    }

    fn slice_fades(&mut self) -> Result<(), AtlasError> {
        for i in 0..3u32 {
            self.make_group("fademask", (i, 0), &format!("fademask{}", i))?;
            self.make_group("fadestarclan", (i, 0), &format!("fadestarclan{}", i))?;
            self.make_group("fadedarkforest", (i, 0), &format!("fadedf{}", i))?;
        }
        Ok(())
    }

    fn slice_eyes(&mut self) -> Result<(), AtlasError> {
        for (row, colours) in tables::EYE_COLOURS.iter().enumerate() {
            for (col, colour) in colours.iter().enumerate() {
                let offset = (col as u32, row as u32);
                self.make_group("eyes", offset, &format!("eyes{}", colour))?;
                self.make_group("eyes2", offset, &format!("eyes2{}", colour))?;
            }
        }
        Ok(())
    }

    fn slice_white_patches(&mut self) -> Result<(), AtlasError> {
        for (row, patches) in tables::WHITE_PATCHES.iter().enumerate() {
            for (col, patch) in patches.iter().enumerate() {
                let offset = (col as u32, row as u32);
                self.make_group("whitepatches", offset, &format!("white{}", patch))?;
            }
        }
        Ok(())
    }

    fn slice_pelts(&mut self) -> Result<(), AtlasError> {
        for (row, colours) in tables::PELT_COLOURS.iter().enumerate() {
            for (col, colour) in colours.iter().enumerate() {
                for &(sheet, prefix) in tables::PELT_SHEETS {
                    let offset = (col as u32, row as u32);
                    self.make_group(sheet, offset, &format!("{}{}", prefix, colour))?;
                }
            }
        }
        Ok(())
    }

    fn slice_tortie_masks(&mut self) -> Result<(), AtlasError> {
        for (row, masks) in tables::TORTIE_MASKS.iter().enumerate() {
            for (col, mask) in masks.iter().enumerate() {
                let offset = (col as u32, row as u32);
                self.make_group("tortiepatchesmasks", offset, &format!("tortiemask{}", mask))?;
            }
        }
        Ok(())
    }

    fn slice_skins(&mut self) -> Result<(), AtlasError> {
        for (row, colours) in tables::SKIN_COLOURS.iter().enumerate() {
            for (col, colour) in colours.iter().enumerate() {
                let offset = (col as u32, row as u32);
                self.make_group("skin", offset, &format!("skin{}", colour))?;
            }
        }
        Ok(())
    }

    fn slice_scars(&mut self) -> Result<(), AtlasError> {
        for (row, scars) in tables::SCARS.iter().enumerate() {
            for (col, scar) in scars.iter().enumerate() {
                let offset = (col as u32, row as u32);
                self.make_group("scars", offset, &format!("scars{}", scar))?;
            }
        }
        // Missing parts share the scars prefix.
        for (row, parts) in tables::MISSING_PARTS.iter().enumerate() {
            for (col, part) in parts.iter().enumerate() {
                let offset = (col as u32, row as u32);
                self.make_group("missingscars", offset, &format!("scars{}", part))?;
            }
        }
        Ok(())
    }

    fn slice_accessories(&mut self) -> Result<(), AtlasError> {
        for (row, herbs) in tables::HERB_ACCESSORIES.iter().enumerate() {
            for (col, herb) in herbs.iter().enumerate() {
                let offset = (col as u32, row as u32);
                self.make_group("medcatherbs", offset, &format!("acc_herbs{}", herb))?;
            }
        }
        // Dried herbs sit past the wild accessories on row 2.
        self.make_group("medcatherbs", (5, 2), "acc_herbsDRY HERBS")?;

        for wilds in tables::WILD_ACCESSORIES {
            for (col, wild) in wilds.iter().enumerate() {
                self.make_group("medcatherbs", (col as u32, 2), &format!("acc_wild{}", wild))?;
            }
        }

        for (sheet, table) in [
            ("collars", tables::COLLARS),
            ("bellcollars", tables::BELL_COLLARS),
            ("bowcollars", tables::BOW_COLLARS),
            ("nyloncollars", tables::NYLON_COLLARS),
        ] {
            for (row, collars) in table.iter().enumerate() {
                for (col, collar) in collars.iter().enumerate() {
                    let offset = (col as u32, row as u32);
                    self.make_group(sheet, offset, &format!("collars{}", collar))?;
                }
            }
        }
        Ok(())
    }
}

/// Copy a `width x height` rectangle starting at `(x, y)` in `source` into a
/// fresh transparent buffer, clamping to the source bounds.
fn copy_region(source: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(width, height, TRANSPARENT);
    let copy_w = source.width().saturating_sub(x).min(width);
    let copy_h = source.height().saturating_sub(y).min(height);
    for dy in 0..copy_h {
        for dx in 0..copy_w {
            out.put_pixel(dx, dy, *source.get_pixel(x + dx, y + dy));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sized_atlas(size: u32) -> SpriteAtlas {
        let mut atlas = SpriteAtlas::new(AtlasConfig::default());
        atlas.size = Some(size);
        atlas
    }

    /// A sheet where every cell is filled with its cell coordinates:
    /// the pixel value encodes (cell column, cell row).
    fn coordinate_sheet(width: u32, height: u32, size: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x / size) as u8, (y / size) as u8, 0, 255])
        })
    }

    #[test]
    fn test_infer_cell_size_from_grid_reference() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lineart.png");
        RgbaImage::new(150, 350).save(&path).unwrap();

        let mut atlas = SpriteAtlas::new(AtlasConfig::default());
        let size = atlas.infer_cell_size(&path).unwrap();

        assert_eq!(size, 50);
        assert_eq!(atlas.cell_size(), Some(50));
        assert!(atlas.warnings().is_empty());
    }

    #[test]
    fn test_infer_cell_size_fallback_on_mismatched_reference() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lineart.png");
        RgbaImage::new(100, 100).save(&path).unwrap();

        let mut atlas = SpriteAtlas::new(AtlasConfig::default());
        let size = atlas.infer_cell_size(&path).unwrap();

        assert_eq!(size, DEFAULT_CELL_SIZE);
        assert_eq!(atlas.warnings().len(), 1);
        assert!(atlas.warnings()[0].message.contains("100x100"));
    }

    #[test]
    fn test_configured_cell_size_skips_reference() {
        let config = AtlasConfig {
            cell_size: Some(25),
            ..AtlasConfig::default()
        };
        let mut atlas = SpriteAtlas::new(config);

        // The reference is never read, so a bogus path must succeed.
        let size = atlas.infer_cell_size(Path::new("/nonexistent.png")).unwrap();

        assert_eq!(size, 25);
        assert!(atlas.warnings().is_empty());
    }

    #[test]
    fn test_infer_cell_size_missing_reference_is_fatal() {
        let mut atlas = SpriteAtlas::new(AtlasConfig::default());
        let err = atlas
            .infer_cell_size(Path::new("/nonexistent.png"))
            .unwrap_err();
        assert!(matches!(err, AtlasError::Reference { .. }));
    }

    #[test]
    fn test_make_group_splits_cells_row_major() {
        let mut atlas = sized_atlas(50);
        atlas
            .spritesheets
            .insert("lineart".to_string(), coordinate_sheet(150, 350, 50));

        atlas.make_group("lineart", (0, 0), "lines").unwrap();

        let group = atlas.group("lines").unwrap();
        assert_eq!((group.width(), group.height()), (150, 350));

        // Exactly 21 cells, keyed lines0..lines20.
        for index in 0..21u32 {
            let cell = atlas
                .sprite(&format!("lines{}", index))
                .unwrap_or_else(|| panic!("missing cell lines{}", index));
            assert_eq!((cell.width(), cell.height()), (50, 50));
            let expected = Rgba([(index % 3) as u8, (index / 3) as u8, 0, 255]);
            assert_eq!(*cell.get_pixel(0, 0), expected);
            assert_eq!(*cell.get_pixel(49, 49), expected);
        }
        assert!(atlas.sprite("lines21").is_none());
    }

    #[test]
    fn test_make_group_offset_addresses_whole_blocks() {
        let mut atlas = sized_atlas(50);
        // Three 150x350 blocks side by side; red channel = cell column.
        atlas
            .spritesheets
            .insert("fademask".to_string(), coordinate_sheet(450, 350, 50));

        atlas.make_group("fademask", (2, 0), "fademask2").unwrap();

        // Block 2 starts at pixel x = 2 * 3 * 50 = 300, i.e. cell column 6.
        let group = atlas.group("fademask2").unwrap();
        assert_eq!(*group.get_pixel(0, 0), Rgba([6, 0, 0, 255]));
        assert_eq!(
            *atlas.sprite("fademask20").unwrap().get_pixel(0, 0),
            Rgba([6, 0, 0, 255])
        );
        assert_eq!(
            *atlas.sprite("fademask22").unwrap().get_pixel(0, 0),
            Rgba([8, 0, 0, 255])
        );
    }

    #[test]
    fn test_make_group_is_idempotent() {
        let mut atlas = sized_atlas(50);
        atlas
            .spritesheets
            .insert("lineart".to_string(), coordinate_sheet(150, 350, 50));

        atlas.make_group("lineart", (0, 0), "lines").unwrap();
        let group_a = atlas.group("lines").unwrap().clone();
        let cell_a = atlas.sprite("lines13").unwrap().clone();

        atlas.make_group("lineart", (0, 0), "lines").unwrap();

        assert_eq!(atlas.group("lines").unwrap().as_raw(), group_a.as_raw());
        assert_eq!(atlas.sprite("lines13").unwrap().as_raw(), cell_a.as_raw());
    }

    #[test]
    fn test_make_group_overwrites_same_name() {
        let mut atlas = sized_atlas(50);
        atlas
            .spritesheets
            .insert("sheet".to_string(), coordinate_sheet(300, 350, 50));

        atlas.make_group("sheet", (0, 0), "g").unwrap();
        atlas.make_group("sheet", (1, 0), "g").unwrap();

        // Second call wins: block 1 starts at cell column 3.
        assert_eq!(*atlas.group("g").unwrap().get_pixel(0, 0), Rgba([3, 0, 0, 255]));
        assert_eq!(*atlas.sprite("g0").unwrap().get_pixel(0, 0), Rgba([3, 0, 0, 255]));
    }

    #[test]
    fn test_make_group_unknown_sheet_fails_loudly() {
        let mut atlas = sized_atlas(50);
        let err = atlas.make_group("never_loaded", (0, 0), "g").unwrap_err();
        assert!(matches!(err, AtlasError::UnknownSheet(name) if name == "never_loaded"));
    }

    #[test]
    fn test_make_group_without_cell_size_fails() {
        let mut atlas = SpriteAtlas::new(AtlasConfig::default());
        atlas
            .spritesheets
            .insert("lineart".to_string(), RgbaImage::new(150, 350));

        let err = atlas.make_group("lineart", (0, 0), "lines").unwrap_err();
        assert!(matches!(err, AtlasError::SizeUnset));
    }

    #[test]
    fn test_out_of_bounds_region_stays_transparent() {
        let mut atlas = sized_atlas(50);
        // Sheet only one block wide; offset (1, 0) lies fully outside it.
        atlas.spritesheets.insert(
            "small".to_string(),
            RgbaImage::from_pixel(150, 350, Rgba([255, 255, 255, 255])),
        );

        atlas.make_group("small", (1, 0), "empty").unwrap();

        let group = atlas.group("empty").unwrap();
        assert_eq!((group.width(), group.height()), (150, 350));
        assert_eq!(*group.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(
            *atlas.sprite("empty20").unwrap().get_pixel(49, 49),
            TRANSPARENT
        );
    }

    #[test]
    fn test_custom_grid_cell_count() {
        let mut atlas = sized_atlas(10);
        atlas
            .spritesheets
            .insert("sheet".to_string(), coordinate_sheet(20, 20, 10));

        atlas
            .make_group_grid("sheet", (0, 0), "quad", 2, 2)
            .unwrap();

        assert_eq!(atlas.sprites().len(), 4);
        assert_eq!(
            *atlas.sprite("quad3").unwrap().get_pixel(0, 0),
            Rgba([1, 1, 0, 255])
        );
        assert!(atlas.sprite("quad4").is_none());
    }
}

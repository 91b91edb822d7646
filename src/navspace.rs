//! The `.denavspace` binary navigation space format and the editor object
//! that owns a loaded space.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use glam::{DVec3, Vec3, Vec4};

use crate::{DekitError, DekitResult};

/// Magic bytes every `.denavspace` file starts with.
pub const SIGNATURE: &[u8; 29] = b"Drag[en]gine Navigation Space";

/// The only layout version this crate reads and writes.
pub const VERSION: u16 = 1;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SpaceType {
    #[default]
    Grid,
    Mesh,
    Volume,
}

impl SpaceType {
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::Grid),
            1 => Some(Self::Mesh),
            2 => Some(Self::Volume),
            _ => None,
        }
    }

    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Grid => 0,
            Self::Mesh => 1,
            Self::Volume => 2,
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct NavigationEdge {
    pub vertex1: u16,
    pub vertex2: u16,
    pub cost_type1: u16,
    pub cost_type2: u16,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct NavigationCorner {
    pub vertex: u16,
    pub cost_type: u16,
}

/// A face owns the next `corner_count` corners of the corner list.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct NavigationFace {
    pub corner_count: u16,
    pub cost_type: u16,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct NavigationWall {
    pub face: u16,
    pub cost_type: u16,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct NavigationRoom {
    pub front_wall_count: u16,
    pub back_wall_count: u16,
    pub cost_type: u16,
}

/// Geometry of one navigation space as stored in a `.denavspace` file.
///
/// The default value is an empty grid space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationSpace {
    pub space_type: SpaceType,
    pub vertices: Vec<Vec3>,
    pub edges: Vec<NavigationEdge>,
    pub corners: Vec<NavigationCorner>,
    pub faces: Vec<NavigationFace>,
    pub walls: Vec<NavigationWall>,
    pub rooms: Vec<NavigationRoom>,
}

impl NavigationSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.faces.is_empty() && self.edges.is_empty()
    }

    /// Cost types referenced by faces and edges, in order of first use.
    pub fn used_cost_types(&self) -> Vec<u16> {
        let mut used = Vec::new();
        let face_types = self.faces.iter().map(|face| face.cost_type);
        let edge_types = self
            .edges
            .iter()
            .flat_map(|edge| [edge.cost_type1, edge.cost_type2]);

        for cost_type in face_types.chain(edge_types) {
            if !used.contains(&cost_type) {
                used.push(cost_type);
            }
        }
        used
    }

    /// Parses a navigation space from `reader`.
    ///
    /// `filename` is only used in error values and log messages. Files with
    /// an unknown version load as an empty space.
    ///
    /// # Errors
    /// * `DekitError::InvalidFileFormat` if the signature does not match or
    ///   the space type is unknown.
    /// * `DekitError::Io` if the data ends early or cannot be read.
    pub fn read_from<R: Read>(reader: &mut R, filename: &str) -> DekitResult<Self> {
        let mut file = FileReader { reader, filename };

        let mut signature = [0_u8; 29];
        file.read_bytes(&mut signature)?;
        if &signature != SIGNATURE {
            return Err(DekitError::invalid_file_format(filename));
        }

        let version = file.read_u16()?;
        let _flags = file.read_u16()?;

        if version != VERSION {
            log::warn!(
                "Navigation space {} has unsupported version {}, loading it as empty",
                filename,
                version
            );
            return Ok(Self::default());
        }

        let vertex_count = file.read_u16()?;
        let edge_count = file.read_u16()?;
        let corner_count = file.read_u16()?;
        let face_count = file.read_u16()?;
        let wall_count = file.read_u16()?;
        let room_count = file.read_u16()?;
        let space_type = SpaceType::from_u16(file.read_u16()?)
            .ok_or_else(|| DekitError::invalid_file_format(filename))?;

        let vertices = file.read_records(vertex_count, |file| {
            Ok(Vec3::new(file.read_f32()?, file.read_f32()?, file.read_f32()?))
        })?;
        let edges = file.read_records(edge_count, |file| {
            Ok(NavigationEdge {
                vertex1: file.read_u16()?,
                vertex2: file.read_u16()?,
                cost_type1: file.read_u16()?,
                cost_type2: file.read_u16()?,
            })
        })?;
        let corners = file.read_records(corner_count, |file| {
            Ok(NavigationCorner {
                vertex: file.read_u16()?,
                cost_type: file.read_u16()?,
            })
        })?;
        let faces = file.read_records(face_count, |file| {
            Ok(NavigationFace {
                corner_count: file.read_u16()?,
                cost_type: file.read_u16()?,
            })
        })?;
        let walls = file.read_records(wall_count, |file| {
            Ok(NavigationWall {
                face: file.read_u16()?,
                cost_type: file.read_u16()?,
            })
        })?;
        let rooms = file.read_records(room_count, |file| {
            Ok(NavigationRoom {
                front_wall_count: file.read_u16()?,
                back_wall_count: file.read_u16()?,
                cost_type: file.read_u16()?,
            })
        })?;

        Ok(Self {
            space_type,
            vertices,
            edges,
            corners,
            faces,
            walls,
            rooms,
        })
    }

    /// # Errors
    /// See [`NavigationSpace::read_from`]; opening the file fails with
    /// `DekitError::Io`.
    pub fn load<P: AsRef<Path>>(path: P) -> DekitResult<Self> {
        let path = path.as_ref();
        let filename = path.display().to_string();
        let file = File::open(path).map_err(|e| DekitError::io(&filename, &e))?;
        Self::read_from(&mut BufReader::new(file), &filename)
    }

    /// Writes the space as a version 1 file with no flags set.
    ///
    /// # Errors
    /// * `DekitError::InvalidParam` if a record list holds more than
    ///   `u16::MAX` entries.
    /// * `DekitError::Io` if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, filename: &str) -> DekitResult<()> {
        let counts = [
            record_count("vertex", self.vertices.len())?,
            record_count("edge", self.edges.len())?,
            record_count("corner", self.corners.len())?,
            record_count("face", self.faces.len())?,
            record_count("wall", self.walls.len())?,
            record_count("room", self.rooms.len())?,
        ];

        let mut file = FileWriter { writer, filename };
        file.write_bytes(SIGNATURE)?;
        file.write_u16(VERSION)?;
        file.write_u16(0)?;
        for count in counts {
            file.write_u16(count)?;
        }
        file.write_u16(self.space_type.as_u16())?;

        for vertex in &self.vertices {
            file.write_f32(vertex.x)?;
            file.write_f32(vertex.y)?;
            file.write_f32(vertex.z)?;
        }
        for edge in &self.edges {
            file.write_u16(edge.vertex1)?;
            file.write_u16(edge.vertex2)?;
            file.write_u16(edge.cost_type1)?;
            file.write_u16(edge.cost_type2)?;
        }
        for corner in &self.corners {
            file.write_u16(corner.vertex)?;
            file.write_u16(corner.cost_type)?;
        }
        for face in &self.faces {
            file.write_u16(face.corner_count)?;
            file.write_u16(face.cost_type)?;
        }
        for wall in &self.walls {
            file.write_u16(wall.face)?;
            file.write_u16(wall.cost_type)?;
        }
        for room in &self.rooms {
            file.write_u16(room.front_wall_count)?;
            file.write_u16(room.back_wall_count)?;
            file.write_u16(room.cost_type)?;
        }

        file.flush()
    }

    /// # Errors
    /// See [`NavigationSpace::write_to`]; creating the file fails with
    /// `DekitError::Io`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> DekitResult<()> {
        let path = path.as_ref();
        let filename = path.display().to_string();
        let file = File::create(path).map_err(|e| DekitError::io(&filename, &e))?;
        self.write_to(&mut BufWriter::new(file), &filename)
    }
}

fn record_count(kind: &str, len: usize) -> DekitResult<u16> {
    u16::try_from(len).map_err(|_| {
        DekitError::invalid_param(format!(
            "{} {} records do not fit a navigation space file (max {})",
            len,
            kind,
            u16::MAX
        ))
    })
}

/// Little endian primitive reader that tags I/O errors with the filename.
struct FileReader<'a, R> {
    reader: &'a mut R,
    filename: &'a str,
}

impl<R: Read> FileReader<'_, R> {
    fn read_bytes(&mut self, buffer: &mut [u8]) -> DekitResult<()> {
        self.reader
            .read_exact(buffer)
            .map_err(|e| DekitError::io(self.filename, &e))
    }

    fn read_u16(&mut self) -> DekitResult<u16> {
        let mut bytes = [0_u8; 2];
        self.read_bytes(&mut bytes)?;
        Ok(u16::from_le_bytes(bytes))
    }

    fn read_f32(&mut self) -> DekitResult<f32> {
        let mut bytes = [0_u8; 4];
        self.read_bytes(&mut bytes)?;
        Ok(f32::from_le_bytes(bytes))
    }

    fn read_records<T, F>(&mut self, count: u16, mut read_one: F) -> DekitResult<Vec<T>>
    where
        F: FnMut(&mut Self) -> DekitResult<T>,
    {
        let mut records = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            records.push(read_one(self)?);
        }
        Ok(records)
    }
}

struct FileWriter<'a, W> {
    writer: &'a mut W,
    filename: &'a str,
}

impl<W: Write> FileWriter<'_, W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> DekitResult<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| DekitError::io(self.filename, &e))
    }

    fn write_u16(&mut self, value: u16) -> DekitResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    fn write_f32(&mut self, value: f32) -> DekitResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    fn flush(&mut self) -> DekitResult<()> {
        self.writer
            .flush()
            .map_err(|e| DekitError::io(self.filename, &e))
    }
}

/// A navigation space placed in an edited world.
///
/// Owns the geometry loaded from its file. Loading never fails from the
/// caller's point of view: a missing or broken file leaves an empty space
/// and [`EditorNavigationSpace::shows_placeholder`] turns true so the object
/// can still be picked in the editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorNavigationSpace {
    filename: String,
    position: DVec3,
    orientation: Vec3,
    selected: bool,
    active: bool,
    space: NavigationSpace,
    used_cost_types: Vec<u16>,
}

impl EditorNavigationSpace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Sets the file and reloads the space. Does nothing if unchanged.
    pub fn set_filename<T: AsRef<str>>(&mut self, filename: T) {
        let filename = filename.as_ref();
        if self.filename == filename {
            return;
        }

        self.filename = filename.to_string();
        self.load_from_file();
    }

    pub const fn position(&self) -> DVec3 {
        self.position
    }

    pub const fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Euler angles in degrees.
    pub const fn orientation(&self) -> Vec3 {
        self.orientation
    }

    pub const fn set_orientation(&mut self, orientation: Vec3) {
        self.orientation = orientation;
    }

    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub const fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    pub const fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn space(&self) -> &NavigationSpace {
        &self.space
    }

    /// Replaces the edited space, for example after the geometry was
    /// rebuilt. The file is not touched until [`EditorNavigationSpace::save_to_file`].
    pub fn set_space(&mut self, space: NavigationSpace) {
        self.space = space;
        self.used_cost_types = self.space.used_cost_types();
    }

    pub fn used_cost_types(&self) -> &[u16] {
        &self.used_cost_types
    }

    /// Reloads the space from [`EditorNavigationSpace::filename`].
    ///
    /// The space is reset to an empty grid first. Load errors are logged
    /// and leave the space empty.
    pub fn load_from_file(&mut self) {
        self.space = NavigationSpace::default();

        if !self.filename.is_empty() && Path::new(&self.filename).exists() {
            match NavigationSpace::load(&self.filename) {
                Ok(space) => self.space = space,
                Err(e) => {
                    self.space = NavigationSpace::default();
                    log::error!("Failed to load navigation space {}: {}", self.filename, e);
                }
            }
        }

        self.used_cost_types = self.space.used_cost_types();
    }

    /// # Errors
    /// * `DekitError::InvalidParam` if no filename is set.
    /// * See [`NavigationSpace::save`].
    pub fn save_to_file(&self) -> DekitResult<()> {
        if self.filename.is_empty() {
            return Err(DekitError::invalid_param(
                "navigation space has no filename to save to",
            ));
        }
        self.space.save(&self.filename)
    }

    /// True while there is no geometry to show, so a placeholder box is
    /// drawn instead.
    pub fn shows_placeholder(&self) -> bool {
        self.space.is_empty()
    }

    /// Whether a collision model can be built from the geometry: grid spaces
    /// need edges, mesh spaces need faces. Volume spaces never qualify.
    pub fn can_build_model(&self) -> bool {
        match self.space.space_type {
            SpaceType::Grid => !self.space.edges.is_empty(),
            SpaceType::Mesh => !self.space.faces.is_empty(),
            SpaceType::Volume => false,
        }
    }

    /// Edge and fill color of the debug drawing: orange when active, red
    /// when selected, blue otherwise.
    pub const fn highlight_colors(&self) -> (Vec4, Vec4) {
        if self.active {
            (Vec4::new(1.0, 0.5, 0.0, 1.0), Vec4::new(1.0, 0.5, 0.0, 0.1))
        } else if self.selected {
            (Vec4::new(1.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 0.0, 0.0, 0.1))
        } else {
            (Vec4::new(0.0, 0.25, 1.0, 1.0), Vec4::new(0.0, 0.25, 1.0, 0.1))
        }
    }
}

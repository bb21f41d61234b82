use serde::{Deserialize, Serialize};

/// Position of an entry inside the filtered view it was rendered from.
pub type ViewIndex = usize;
pub type Revision = u64;

// <Song FilePath="D:\Music\Blue Moon.mp3" FileSize="8388608">
//   <Tags Author="The Marcels" Title="Blue Moon" Genre="Doo-wop" Year="1961" />
//   <Infos SongLength="134.6" />
//   <Scan Version="801" Bpm="0.468750" Key="Am" />
//   <Poi Pos="0.012" Type="beatgrid" />
//   <Poi Name="Buildup 1" Pos="60.5" Num="1" />
//   <Poi Name="End Break 1" Pos="75.2" Num="2" />
// </Song>
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Song {
  pub title: String,
  #[serde(rename = "filePath")]
  pub file_path: Option<String>,
  pub artist: Option<String>,
  pub album: Option<String>,
  pub genre: Option<String>,
  pub year: Option<String>,
  pub key: Option<String>,
  pub bpm: Option<f64>,
  #[serde(rename = "lengthSecs")]
  pub length_secs: Option<f64>,
  pub pois: Vec<Poi>,
}

impl Song {
  pub fn titled(title: impl Into<String>) -> Self {
    Song {
      title: title.into(),
      ..Default::default()
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Poi {
  pub name: Option<String>,
  pub pos: f64,
  pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
  Build,
  Drop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
  pub kind: SegmentKind,
  pub start: f64,
  pub end: f64,
  #[serde(rename = "poiName")]
  pub poi_name: String,
}

/// A cue point referenced from the match file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiRef {
  pub name: String,
  pub pos: f64,
}

// <Song FilePath="D:\Music\Blue Moon.mp3">
//   <Match MatchType="Build" Similarity="87%">
//     <Poi Name="Buildup 1" Pos="60.5" />
//     <Song FilePath="D:\Music\Bluebird.mp3">
//       <Poi Name="Buildup" Pos="31.0" />
//     </Song>
//   </Match>
// </Song>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiMatch {
  #[serde(rename = "matchType")]
  pub match_type: SegmentKind,
  /// Percent, 0..=100.
  pub similarity: u8,
  pub poi: PoiRef,
  #[serde(rename = "otherFilePath")]
  pub other_file_path: String,
  #[serde(rename = "otherPoi")]
  pub other_poi: PoiRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
  pub index: ViewIndex,
  pub title: String,
  pub artist: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedList {
  pub query: String,
  pub revision: Revision,
  /// Size of the whole catalog, not of this list.
  pub total: usize,
  pub entries: Vec<ListEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarSong {
  #[serde(rename = "matchType")]
  pub match_type: SegmentKind,
  pub similarity: u8,
  pub poi: PoiRef,
  #[serde(rename = "filePath")]
  pub file_path: String,
  /// Catalog title of the partner, when the partner is in the catalog.
  pub title: Option<String>,
  /// Whether the two keys mix harmonically, when both are known.
  pub harmonic: Option<bool>,
  #[serde(rename = "otherPoi")]
  pub other_poi: PoiRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongDetail {
  pub index: ViewIndex,
  pub song: Song,
  pub segments: Vec<Segment>,
  #[serde(rename = "compatibleKeys")]
  pub compatible_keys: Vec<String>,
  #[serde(rename = "similarSongs")]
  pub similar_songs: Vec<SimilarSong>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStatus {
  pub revision: Revision,
  pub songs: usize,
  #[serde(rename = "matchedSongs")]
  pub matched_songs: usize,
  #[serde(rename = "loadedAt")]
  pub loaded_at: i64,
  pub version: String,
}

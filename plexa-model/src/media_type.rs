use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::{ModelError, Result};

/// The kind of media item a library section lists.
///
/// Serialized as the lowerCamelCase protocol name (`"movie"`,
/// `"photoAlbum"`, ...), which is the spelling the `viewGroup` response
/// field carries. The numeric key used in the `type` query parameter is a
/// separate mapping, see [`MediaType::wire_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    Movie,
    Show,
    Season,
    Episode,
    Trailer,
    Comic,
    Person,
    Artist,
    Album,
    Track,
    PhotoAlbum,
    Picture,
    Photo,
    Clip,
    PlaylistItem,
}

impl MediaType {
    /// The stable numeric key sent in the `type` query parameter.
    pub fn wire_key(&self) -> &'static str {
        match self {
            MediaType::Movie => "1",
            MediaType::Show => "2",
            MediaType::Season => "3",
            MediaType::Episode => "4",
            MediaType::Trailer => "5",
            MediaType::Comic => "6",
            MediaType::Person => "7",
            MediaType::Artist => "8",
            MediaType::Album => "9",
            MediaType::Track => "10",
            MediaType::PhotoAlbum => "11",
            MediaType::Picture => "12",
            MediaType::Photo => "13",
            MediaType::Clip => "14",
            MediaType::PlaylistItem => "15",
        }
    }

    /// The protocol name, as it appears in response payloads.
    pub fn protocol_name(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Show => "show",
            MediaType::Season => "season",
            MediaType::Episode => "episode",
            MediaType::Trailer => "trailer",
            MediaType::Comic => "comic",
            MediaType::Person => "person",
            MediaType::Artist => "artist",
            MediaType::Album => "album",
            MediaType::Track => "track",
            MediaType::PhotoAlbum => "photoAlbum",
            MediaType::Picture => "picture",
            MediaType::Photo => "photo",
            MediaType::Clip => "clip",
            MediaType::PlaylistItem => "playlistItem",
        }
    }

    /// Resolve a numeric wire key back into a media type.
    pub fn from_wire_key(key: &str) -> Result<Self> {
        match key {
            "1" => Ok(MediaType::Movie),
            "2" => Ok(MediaType::Show),
            "3" => Ok(MediaType::Season),
            "4" => Ok(MediaType::Episode),
            "5" => Ok(MediaType::Trailer),
            "6" => Ok(MediaType::Comic),
            "7" => Ok(MediaType::Person),
            "8" => Ok(MediaType::Artist),
            "9" => Ok(MediaType::Album),
            "10" => Ok(MediaType::Track),
            "11" => Ok(MediaType::PhotoAlbum),
            "12" => Ok(MediaType::Picture),
            "13" => Ok(MediaType::Photo),
            "14" => Ok(MediaType::Clip),
            "15" => Ok(MediaType::PlaylistItem),
            other => Err(ModelError::UnknownMediaType(other.to_string())),
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.protocol_name())
    }
}

use url::form_urlencoded;

use crate::contract::EntryId;

pub const ENTRY_PATH: &str = "/";
pub const DRAW_PATH: &str = "/lottery";
pub const ENTRY_ID_PARAM: &str = "id";

/// The two screens of the flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Entry,
    Draw { entry_id: EntryId },
}

impl Route {
    /// Resolves the draw screen for an optional id. Without one the flow fails
    /// closed and lands on the entry form.
    pub fn draw(entry_id: Option<&str>) -> Self {
        match entry_id.and_then(EntryId::new) {
            Some(entry_id) => Route::Draw { entry_id },
            None => Route::Entry,
        }
    }

    /// Parses a location such as `/lottery?id=E1`. Unknown paths land on the
    /// entry form.
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };

        if path.trim_end_matches('/') != DRAW_PATH {
            return Route::Entry;
        }

        let entry_id = query.and_then(|query| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == ENTRY_ID_PARAM)
                .map(|(_, value)| value.into_owned())
        });
        Route::draw(entry_id.as_deref())
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Entry => ENTRY_PATH.to_string(),
            Route::Draw { entry_id } => {
                let encoded: String =
                    form_urlencoded::byte_serialize(entry_id.as_str().as_bytes()).collect();
                format!("{DRAW_PATH}?{ENTRY_ID_PARAM}={encoded}")
            }
        }
    }

    pub fn entry_id(&self) -> Option<&EntryId> {
        match self {
            Route::Entry => None,
            Route::Draw { entry_id } => Some(entry_id),
        }
    }
}

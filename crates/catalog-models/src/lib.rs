pub mod content;
pub mod criteria;
pub mod profile;
pub mod watchlist;

pub use content::{ContentItem, ContentType};
pub use criteria::{FilterCriteria, GenreFilter, SortKey};
pub use profile::{SettingFlag, Settings, UserProfile, DATA_USAGE_MODES, LANGUAGES};
pub use watchlist::{MyListEntry, WatchlistEntry};

pub mod mastering;
pub mod volumes;

pub use mastering::list_subfolders;
pub use volumes::{list_candidate_drives, list_volume_names, locate_mastering_folder};

pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod remote;
pub mod safe_dom;
pub mod toast;

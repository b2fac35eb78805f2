pub mod risk;
pub mod work_item;

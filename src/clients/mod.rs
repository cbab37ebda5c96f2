pub mod weather;
pub mod wechat;

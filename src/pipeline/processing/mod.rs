// Pipeline processing: status mapping, time labels, and normalization

pub mod normalize;
pub mod status;
pub mod time_format;

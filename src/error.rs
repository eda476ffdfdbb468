pub type Status = status::Status;
pub type Result<T, E = Status> = std::result::Result<T, E>;

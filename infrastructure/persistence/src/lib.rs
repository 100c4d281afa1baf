pub mod db;
pub mod catalog {
    pub mod entity;
    pub mod repository;
}
pub mod storage {
    pub mod file;
    pub mod memory;
    mod quota;
}

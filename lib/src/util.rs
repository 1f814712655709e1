pub trait Log {
    fn log(&self);
}

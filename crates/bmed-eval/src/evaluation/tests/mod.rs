mod common;
mod management;

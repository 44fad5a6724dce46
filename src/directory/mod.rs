pub mod look_up;

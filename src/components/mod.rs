pub mod tree_canvas;

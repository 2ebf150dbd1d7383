mod badges;
mod clusters;
mod common;
mod recommendations;

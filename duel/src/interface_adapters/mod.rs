// Interface adapters: keyboard mapping, HUD derivations, serialized formats and
// the headless presentation host.

pub mod headless;
pub mod hud;
pub mod keymap;
pub mod protocol;

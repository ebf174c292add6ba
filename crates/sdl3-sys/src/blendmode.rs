//! SDL_blendmode.h: blend mode constants.

pub type SDL_BlendMode = u32;

pub const SDL_BLENDMODE_NONE: SDL_BlendMode = 0x0000_0000;
pub const SDL_BLENDMODE_BLEND: SDL_BlendMode = 0x0000_0001;
pub const SDL_BLENDMODE_BLEND_PREMULTIPLIED: SDL_BlendMode = 0x0000_0010;
pub const SDL_BLENDMODE_ADD: SDL_BlendMode = 0x0000_0002;
pub const SDL_BLENDMODE_ADD_PREMULTIPLIED: SDL_BlendMode = 0x0000_0020;
pub const SDL_BLENDMODE_MOD: SDL_BlendMode = 0x0000_0004;
pub const SDL_BLENDMODE_MUL: SDL_BlendMode = 0x0000_0008;
pub const SDL_BLENDMODE_INVALID: SDL_BlendMode = 0x7FFF_FFFF;

//! Runtime support library surface.
//!
//! Generated code never implements pixel or image arithmetic itself; it calls
//! into the runtime classes named here (`ConsoleIO`, `PixelOps`, `ImageOps`,
//! `FileURLIO`). Every name and call shape the code generator emits lives in
//! this module, so changing one of them is a change to the contract with every
//! previously generated program.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::ast::types::{Channel, Operator};

pub const CONSOLE_WRITE: &str = "ConsoleIO.write";
pub const CONSOLE_WRITE_PIXEL: &str = "ConsoleIO.writePixel";

pub const PIXEL_PACK: &str = "PixelOps.pack";

pub const IMAGE_GET_RGB: &str = "ImageOps.getRGB";
pub const IMAGE_SET_RGB: &str = "ImageOps.setRGB";
pub const IMAGE_MAKE: &str = "ImageOps.makeImage";
pub const IMAGE_COPY_AND_RESIZE: &str = "ImageOps.copyAndResize";
pub const IMAGE_EQUALS: &str = "ImageOps.equalsForCodeGen";
pub const IMAGE_READ: &str = "FileURLIO.readImage";

pub const IMAGE_IMAGE_OP: &str = "ImageOps.binaryImageImageOp";
pub const IMAGE_PIXEL_OP: &str = "ImageOps.binaryImagePixelOp";
pub const IMAGE_SCALAR_OP: &str = "ImageOps.binaryImageScalarOp";
pub const PIXEL_PIXEL_OP: &str = "ImageOps.binaryPackedPixelPixelOp";
pub const PIXEL_INT_OP: &str = "ImageOps.binaryPackedPixelIntOp";
pub const PIXEL_BOOLEAN_OP: &str = "ImageOps.binaryPackedPixelBooleanOp";
pub const PIXEL_EQUALS_TAG: &str = "ImageOps.BoolOP.EQUALS";

pub const MATH_ROUND: &str = "Math.round";
pub const MATH_POW: &str = "Math.pow";

/// Largest value a single color channel can hold (`Z`).
pub const MAX_CHANNEL_VALUE: u32 = 255;

lazy_static! {
    /// Classes the generated code calls through by simple name. A local with
    /// one of these names would hide the class inside the method.
    pub static ref RUNTIME_CLASSES: HashSet<&'static str> = {
        let functions = [
            CONSOLE_WRITE,
            PIXEL_PACK,
            IMAGE_GET_RGB,
            IMAGE_READ,
            MATH_ROUND,
        ];
        functions
            .into_iter()
            .filter_map(|function| function.split('.').next())
            .collect()
    };

    /// Named colors, as packed ARGB values of the matching `java.awt.Color`.
    pub static ref COLOR_CONSTANTS: HashMap<&'static str, u32> = {
        let mut map = HashMap::new();
        map.insert("BLACK", 0xff000000);
        map.insert("BLUE", 0xff0000ff);
        map.insert("CYAN", 0xff00ffff);
        map.insert("DARK_GRAY", 0xff404040);
        map.insert("GRAY", 0xff808080);
        map.insert("GREEN", 0xff00ff00);
        map.insert("LIGHT_GRAY", 0xffc0c0c0);
        map.insert("MAGENTA", 0xffff00ff);
        map.insert("ORANGE", 0xffffc800);
        map.insert("PINK", 0xffffafaf);
        map.insert("RED", 0xffff0000);
        map.insert("WHITE", 0xffffffff);
        map.insert("YELLOW", 0xffffff00);
        map
    };
}

/// Formats a call to a runtime function.
pub fn call(function: &str, arguments: &[&str]) -> String {
    format!("{}({})", function, arguments.join(", "))
}

/// `PixelOps.red` and friends: read one channel of a packed pixel.
pub fn channel_extractor(channel: Channel) -> &'static str {
    match channel {
        Channel::Red => "PixelOps.red",
        Channel::Green => "PixelOps.green",
        Channel::Blue => "PixelOps.blue",
    }
}

/// Returns a copy of a packed pixel with one channel replaced.
pub fn channel_setter(channel: Channel) -> &'static str {
    match channel {
        Channel::Red => "PixelOps.setRed",
        Channel::Green => "PixelOps.setGreen",
        Channel::Blue => "PixelOps.setBlue",
    }
}

/// Whole-image channel extraction, applied to every pixel.
pub fn image_channel_extractor(channel: Channel) -> &'static str {
    match channel {
        Channel::Red => "ImageOps.extractRed",
        Channel::Green => "ImageOps.extractGreen",
        Channel::Blue => "ImageOps.extractBlue",
    }
}

/// The `ImageOps.OP` tag for an arithmetic operator, if the runtime has one.
pub fn op_tag(operator: Operator) -> Option<&'static str> {
    match operator {
        Operator::Plus => Some("ImageOps.OP.PLUS"),
        Operator::Minus => Some("ImageOps.OP.MINUS"),
        Operator::Times => Some("ImageOps.OP.TIMES"),
        Operator::Div => Some("ImageOps.OP.DIV"),
        Operator::Mod => Some("ImageOps.OP.MOD"),
        Operator::Exp
        | Operator::And
        | Operator::Or
        | Operator::BitAnd
        | Operator::BitOr
        | Operator::Eq
        | Operator::Lt
        | Operator::Gt
        | Operator::Le
        | Operator::Ge
        | Operator::Bang
        | Operator::Width
        | Operator::Height => None,
    }
}

/// Java literal for a named constant, or `None` if the name is unknown.
pub fn constant_literal(name: &str) -> Option<String> {
    if name == "Z" {
        return Some(MAX_CHANNEL_VALUE.to_string());
    }
    COLOR_CONSTANTS
        .get(name)
        .map(|value| format!("0x{:08x}", value))
}

//! Application commands and their permission overwrites.

pub mod fields;

/// Maximum number of global commands of an application.
pub const COMMAND_LIMIT_GLOBAL: usize = 100;

/// Maximum number of commands of an application in one guild.
pub const COMMAND_LIMIT_GUILD: usize = 100;

/// Inclusive bounds of a command or option name's length.
pub const NAME_LENGTH: (usize, usize) = (1, 32);

/// Inclusive bounds of a command or option description's length.
pub const DESCRIPTION_LENGTH: (usize, usize) = (2, 100);

/// Maximum number of options of a command.
pub const OPTIONS_MAX: usize = 25;

/// Maximum number of permission overwrites of a command.
pub const PERMISSION_OVERWRITE_MAX: usize = 100;

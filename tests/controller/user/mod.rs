mod add_favorite;
mod get_user;

use super::*;

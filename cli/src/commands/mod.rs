mod favorite;
mod helpers;
mod plan;
mod shopping;
mod view;

pub(crate) use favorite::{
    cmd_favorite_add, cmd_favorite_list, cmd_favorite_remove, cmd_favorite_toggle,
};
pub(crate) use plan::{cmd_clear, cmd_plan_add, cmd_plan_edit, cmd_plan_remove};
pub(crate) use shopping::{cmd_shopping_generate, cmd_shopping_show};
pub(crate) use view::{cmd_day, cmd_week};

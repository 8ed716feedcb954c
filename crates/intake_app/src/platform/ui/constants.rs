pub const HEADING: &str = "== Enter Product ==";
pub const PROMPT: &str = "Scan barcode> ";
pub const ALERT_PREFIX: &str = "!! ";

pub const CMD_CODE: &str = "code";
pub const CMD_LOOKUP: &str = "lookup";
pub const CMD_TITLE: &str = "title";
pub const CMD_DESCRIPTION: &str = "description";
pub const CMD_PRICE: &str = "price";
pub const CMD_CONDITION: &str = "condition";
pub const CMD_DISMISS: &str = "dismiss";
pub const CMD_SAVE: &str = "save";
pub const CMD_PROCEED: &str = "proceed";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: &str = "quit";

pub const HELP: &str = "\
Scan a barcode (or type it and press Enter) to look it up.
  :code <text>          type into the barcode field without looking up
  :lookup               look up the current barcode
  :title <text>         set the title
  :description <text>   set the description
  :price <text>         set the price
  :condition <value>    new, open-box, used or parts
  :dismiss              acknowledge the current alert
  :save                 Save as Draft
  :proceed              Proceed
  :help                 show this help
  :quit                 exit";

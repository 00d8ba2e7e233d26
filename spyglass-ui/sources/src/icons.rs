use crate::row::{Arrow, RowIcon, SourceIcon};

pub(crate) const ARROW_COLLAPSED: &[u8] =
    include_bytes!("../assets/svg/arrow-collapsed.svg");
pub(crate) const ARROW_EXPANDED: &[u8] =
    include_bytes!("../assets/svg/arrow-expanded.svg");
pub(crate) const FOLDER: &[u8] = include_bytes!("../assets/svg/folder.svg");
pub(crate) const FOLDER_OPENED: &[u8] =
    include_bytes!("../assets/svg/folder-opened.svg");
pub(crate) const FILE: &[u8] = include_bytes!("../assets/svg/file.svg");
pub(crate) const WEBPACK: &[u8] = include_bytes!("../assets/svg/webpack.svg");
pub(crate) const ANGULAR: &[u8] = include_bytes!("../assets/svg/angular.svg");
pub(crate) const EXTENSION: &[u8] =
    include_bytes!("../assets/svg/extension.svg");
pub(crate) const ROOT: &[u8] = include_bytes!("../assets/svg/root.svg");
pub(crate) const DOMAIN: &[u8] = include_bytes!("../assets/svg/domain.svg");
pub(crate) const PRETTY_PRINT: &[u8] =
    include_bytes!("../assets/svg/pretty-print.svg");
pub(crate) const BLACKBOX: &[u8] = include_bytes!("../assets/svg/blackbox.svg");
pub(crate) const WASM: &[u8] = include_bytes!("../assets/svg/wasm.svg");
pub(crate) const JAVASCRIPT: &[u8] =
    include_bytes!("../assets/svg/javascript.svg");
pub(crate) const TYPESCRIPT: &[u8] =
    include_bytes!("../assets/svg/typescript.svg");
pub(crate) const COFFEESCRIPT: &[u8] =
    include_bytes!("../assets/svg/coffeescript.svg");
pub(crate) const VUE: &[u8] = include_bytes!("../assets/svg/vue.svg");

pub(crate) fn arrow_bytes(arrow: Arrow) -> &'static [u8] {
    match arrow {
        Arrow::Collapsed => ARROW_COLLAPSED,
        Arrow::Expanded => ARROW_EXPANDED,
    }
}

pub(crate) fn row_icon_bytes(icon: RowIcon) -> &'static [u8] {
    match icon {
        RowIcon::Webpack => WEBPACK,
        RowIcon::Angular => ANGULAR,
        RowIcon::Extension => EXTENSION,
        RowIcon::Root => ROOT,
        RowIcon::Domain { .. } => DOMAIN,
        RowIcon::Folder { open: true } => FOLDER_OPENED,
        RowIcon::Folder { open: false } => FOLDER,
        RowIcon::Source(source) => source_icon_bytes(source),
    }
}

fn source_icon_bytes(icon: SourceIcon) -> &'static [u8] {
    match icon {
        SourceIcon::PrettyPrinted => PRETTY_PRINT,
        SourceIcon::BlackBoxed => BLACKBOX,
        SourceIcon::Wasm => WASM,
        SourceIcon::JavaScript => JAVASCRIPT,
        SourceIcon::TypeScript => TYPESCRIPT,
        SourceIcon::CoffeeScript => COFFEESCRIPT,
        SourceIcon::Vue => VUE,
        SourceIcon::Default => FILE,
    }
}

//! Lexical path helpers. Nothing here touches the filesystem.

use std::path::{Component, Path};

/// Path of `path` relative to `base`, joined with `/`.
///
/// Both paths are normalized first: `.` is dropped and `..` removes the preceding component.
/// They are then compared component by component; `..` is emitted for every component of
/// `base` not shared with `path`. Equal paths yield an empty string.
pub fn make_relative(path: &Path, base: &Path) -> String {
    let path: Vec<Component<'_>> = normalized(path);
    let base: Vec<Component<'_>> = normalized(base);

    let common = path
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();

    let parents = base[common..].iter().map(|_| "..".to_string());
    let rest = path[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());

    parents.chain(rest).collect::<Vec<_>>().join("/")
}

fn normalized(path: &Path) -> Vec<Component<'_>> {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }
    components
}

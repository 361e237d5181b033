/// 返回第一个包含`target`的分组，没有则返回`None`。
pub(crate) fn assoc<I, G, T>(mut groups: I, target: &T) -> Option<G>
where
    I: Iterator<Item = G>,
    for<'a> &'a G: IntoIterator<Item = &'a T>,
    T: PartialEq + ?Sized,
{
    groups.find(|group| IntoIterator::into_iter(group).any(|item| item == target))
}

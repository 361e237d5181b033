use std::sync::atomic::{AtomicBool, Ordering};

/// 遍历`source`共`times`次，对每个元素执行`action`。
///
/// 每次克隆`source`即一轮遍历，从`source`当前的位置开始，已经推进过的元素不会再出现。
pub(crate) fn cycle_each<I, F>(source: I, times: usize, action: F)
where
    I: Iterator + Clone,
    F: FnMut(I::Item),
{
    itertools::repeat_n(source, times).flatten().for_each(action);
}

/// 无限循环遍历`source`，直到`stop`被置为`true`，返回执行`action`的次数。
///
/// 每个元素执行前检查一次`stop`，因此`action`自身也可以置位以终止循环。
/// 源为空时一轮不会产出任何元素，直接返回。
pub(crate) fn cycle_each_until<I, F>(source: I, stop: &AtomicBool, mut action: F) -> usize
where
    I: Iterator + Clone,
    F: FnMut(I::Item),
{
    let mut count = 0;
    loop {
        let before = count;
        for item in source.clone() {
            if stop.load(Ordering::Relaxed) {
                return count;
            }
            action(item);
            count += 1;
        }
        if count == before {
            return count;
        }
    }
}

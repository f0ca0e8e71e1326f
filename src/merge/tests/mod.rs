mod helpers;
mod tests_merge_bean;
mod tests_merge_item;
mod tests_merge_single;

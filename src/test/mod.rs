mod test_reachability;
mod test_undo;

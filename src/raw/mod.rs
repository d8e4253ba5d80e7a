mod key_sequence;
mod raw_ordered_dict;

pub(crate) use key_sequence::resolve_range;
pub(crate) use raw_ordered_dict::RawOrderedDict;

mod descriptors;
mod types;

use sort_test_tools::instantiate_sort_tests;

mod recursive_lomuto {
    use super::*;

    instantiate_sort_tests!(partition_sort::quicksort::recursive_lomuto::SortImpl);
}

mod recursive_hoare_vacancy {
    use super::*;

    instantiate_sort_tests!(partition_sort::quicksort::recursive_hoare_vacancy::SortImpl);
}

mod recursive_randomized {
    use super::*;

    instantiate_sort_tests!(partition_sort::quicksort::recursive_randomized::SortImpl);
}

mod iterative_fifo {
    use super::*;

    instantiate_sort_tests!(partition_sort::quicksort::iterative_fifo::SortImpl);
}

mod iterative_lifo {
    use super::*;

    instantiate_sort_tests!(partition_sort::quicksort::iterative_lifo::SortImpl);
}

mod iterative_lomuto {
    use super::*;

    instantiate_sort_tests!(partition_sort::quicksort::iterative_lomuto::SortImpl);
}
